use glam::Vec3;
use serde::Serialize;

use super::layout::LIGHT_ROWS;
use crate::util::color::{mix, wave, BLUE, PINK};

/// Point lights per row.
pub const LIGHTS_PER_ROW: usize = 4;

const LIGHT_Z: f32 = -1.7;

/// A colored point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightInstance {
    /// World-space position.
    pub position: Vec3,
    /// Linear RGB color.
    pub color: Vec3,
    /// Light intensity.
    pub intensity: f32,
}

/// Color of light `index` at `time`: a slow wave travelling across the row.
#[must_use]
pub fn light_color(index: usize, time: f32) -> Vec3 {
    let phase = (index as f32 - 1.5) * 4.0 + time;
    mix(PINK, BLUE, wave(phase))
}

/// Two rows of [`LIGHTS_PER_ROW`] lights, upper row first.
#[must_use]
pub fn build_lights(time: f32, intensity: f32) -> Vec<LightInstance> {
    LIGHT_ROWS
        .iter()
        .flat_map(|&y| {
            (0..LIGHTS_PER_ROW).map(move |index| LightInstance {
                position: Vec3::new(index as f32 - 2.0 + 0.5, y, LIGHT_Z),
                color: light_color(index, time),
                intensity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_rows_of_four() {
        let lights = build_lights(0.0, 0.65);
        assert_eq!(lights.len(), 8);
        let xs: Vec<f32> = lights[..4].iter().map(|l| l.position.x).collect();
        assert_eq!(xs, vec![-1.5, -0.5, 0.5, 1.5]);
        assert!(lights[..4].iter().all(|l| l.position.y == 1.1));
        assert!(lights[4..].iter().all(|l| l.position.y == -0.4));
        assert!(lights.iter().all(|l| l.position.z == -1.7));
        assert!(lights.iter().all(|l| l.intensity == 0.65));
    }

    #[test]
    fn rows_share_colors() {
        let lights = build_lights(3.3, 1.0);
        for i in 0..4 {
            assert_eq!(lights[i].color, lights[i + 4].color);
        }
    }

    #[test]
    fn color_follows_wave() {
        // index 1.5 would be phase == time; use time chosen so light 0 has
        // sin(-6 + t) == 1 -> full PINK.
        let t = 6.0 + std::f32::consts::FRAC_PI_2;
        let c = light_color(0, t);
        assert!((c - PINK).length() < 1e-4, "{c:?}");
        let t = 6.0 - std::f32::consts::FRAC_PI_2;
        let c = light_color(0, t);
        assert!((c - BLUE).length() < 1e-4, "{c:?}");
    }
}
