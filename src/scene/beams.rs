use glam::Vec3;
use serde::Serialize;

use super::layout::STRUCTURE_ROWS;
use super::{CylinderGeometry, InstanceId};
use crate::options::GeometryOptions;

/// Beams per row.
pub const BEAMS_PER_ROW: usize = 5;

/// A gradient-shaded cylinder running across the tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeamInstance {
    /// Stable id (row * [`BEAMS_PER_ROW`] + index) used to key the beam's
    /// uniform storage.
    pub id: InstanceId,
    /// World-space position.
    pub position: Vec3,
    /// XYZ Euler rotation in radians.
    pub rotation: Vec3,
    /// Cylinder shape.
    pub geometry: CylinderGeometry,
    /// Value of the beam shader's `time` uniform.
    pub time_uniform: f32,
}

/// z of beam `index` for a camera at `camera_z`.
///
/// The whole set hops forward by one unit each time the rounded camera z
/// increments, so with unit spacing the beams appear to recycle endlessly.
#[must_use]
pub fn beam_z(index: usize, camera_z: f32) -> f32 {
    0.1 - index as f32 - 2.0 + camera_z.round()
}

/// Two rows of [`BEAMS_PER_ROW`] beams, upper row first.
#[must_use]
pub fn build_beams(
    camera_z: f32,
    aspect: f32,
    time: f32,
    options: &GeometryOptions,
) -> Vec<BeamInstance> {
    let geometry = CylinderGeometry {
        radius: options.beam_radius,
        length: options.beam_length_per_aspect * aspect,
        radial_segments: options.radial_segments,
    };
    let rotation = Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2);

    STRUCTURE_ROWS
        .iter()
        .enumerate()
        .flat_map(|(row, &y)| {
            (0..BEAMS_PER_ROW).map(move |index| BeamInstance {
                id: InstanceId((row * BEAMS_PER_ROW + index) as u32),
                position: Vec3::new(0.0, y, beam_z(index, camera_z)),
                rotation,
                geometry,
                time_uniform: time,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_rows_of_five_with_unique_ids() {
        let beams = build_beams(0.0, 2.0, 1.0, &GeometryOptions::default());
        assert_eq!(beams.len(), 10);
        let mut ids: Vec<u32> = beams.iter().map(|b| b.id.0).collect();
        ids.dedup();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        assert!(beams[..5].iter().all(|b| b.position.y == 1.3));
        assert!(beams[5..].iter().all(|b| b.position.y == -0.9));
    }

    #[test]
    fn z_positions_at_rest() {
        let zs: Vec<f32> = (0..5).map(|i| beam_z(i, 0.0)).collect();
        let expected = [-1.9, -2.9, -3.9, -4.9, -5.9];
        for (z, e) in zs.iter().zip(expected) {
            assert!((z - e).abs() < 1e-6);
        }
    }

    #[test]
    fn beams_hop_with_rounded_camera() {
        assert_eq!(beam_z(0, 2.4), beam_z(0, 2.0));
        assert!((beam_z(0, 2.6) - beam_z(0, 2.0) - 1.0).abs() < 1e-6);
        // Beam 0 after one hop sits where the camera-relative slot of
        // beam 0 was: the tunnel looks unchanged.
        assert!((beam_z(1, 1.0) - beam_z(0, 0.0)).abs() < 1e-6);
    }

    #[test]
    fn geometry_scales_with_aspect_and_carries_time() {
        let beams = build_beams(0.0, 1.5, 4.25, &GeometryOptions::default());
        for beam in &beams {
            assert!((beam.geometry.length - 9.0).abs() < 1e-6);
            assert_eq!(beam.geometry.radius, 0.002);
            assert_eq!(beam.geometry.radial_segments, 6);
            assert_eq!(beam.time_uniform, 4.25);
            assert_eq!(beam.position.x, 0.0);
        }
    }
}
