//! Fixed tunnel palette and linear color mixing.
//!
//! Palette values are linear RGB deliberately pushed past 1.0 so the bloom
//! pass picks them up; nothing downstream clamps them.

use glam::Vec3;

/// Magenta end of the light/rail palette.
pub const PINK: Vec3 = Vec3::new(172.0 / 60.0, 17.0 / 60.0, 255.0 / 60.0);

/// Cyan end of the light/rail palette.
pub const BLUE: Vec3 = Vec3::new(0.0, 206.0 / 60.0, 225.0 / 60.0);

/// Blend two colors: `t = 0` yields `b`, `t = 1` yields `a`.
///
/// Written as `b * (1 - t) + a * t` rather than a lerp from `b` so both
/// endpoints are reproduced bit-exactly.
#[inline]
#[must_use]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    b * (1.0 - t) + a * t
}

/// Map a phase to the `[0, 1]` blend factor used by every color wave in the
/// tunnel: `0.5 + 0.5 * sin(phase)`.
#[inline]
#[must_use]
pub fn wave(phase: f32) -> f32 {
    0.5 + 0.5 * phase.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints_are_exact() {
        let a = Vec3::new(0.3, 7.1, -2.25);
        let b = Vec3::new(1.9, 0.0, 4.5);
        assert_eq!(mix(a, b, 0.0), b);
        assert_eq!(mix(a, b, 1.0), a);
        assert_eq!(mix(PINK, BLUE, 0.0), BLUE);
        assert_eq!(mix(PINK, BLUE, 1.0), PINK);
    }

    #[test]
    fn mix_midpoint_averages() {
        let mid = mix(PINK, BLUE, 0.5);
        let expected = (PINK + BLUE) * 0.5;
        assert!((mid - expected).length() < 1e-6);
    }

    #[test]
    fn wave_stays_in_unit_range() {
        for i in 0..200 {
            let w = wave(i as f32 * 0.37 - 20.0);
            assert!((0.0..=1.0).contains(&w), "wave out of range: {w}");
        }
        assert_eq!(wave(0.0), 0.5);
    }
}
