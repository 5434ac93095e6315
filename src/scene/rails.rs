use glam::Vec3;
use serde::Serialize;

use super::layout::STRUCTURE_ROWS;
use super::CylinderGeometry;
use crate::options::GeometryOptions;
use crate::util::color::{mix, wave, BLUE, PINK};

/// Rails sit this far ahead of the camera regardless of dolly.
const RAIL_Z_AHEAD: f32 = -4.0;

/// A thin cylinder pointing down the tunnel, tiled across the view width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RailInstance {
    /// World-space position.
    pub position: Vec3,
    /// XYZ Euler rotation in radians.
    pub rotation: Vec3,
    /// Cylinder shape.
    pub geometry: CylinderGeometry,
    /// Linear RGB color.
    pub color: Vec3,
}

/// Centered slot of column `index` out of `columns`: `index - columns/2 + 0.5`.
#[must_use]
pub fn rail_slot(index: usize, columns: usize) -> f32 {
    index as f32 - columns as f32 / 2.0 + 0.5
}

/// Color of the rail in slot `slot` at `time`.
#[must_use]
pub fn rail_color(slot: f32, time: f32) -> Vec3 {
    mix(BLUE, PINK, wave(slot * 4.0 + time))
}

/// Two rows of `columns` rails, upper row first.
#[must_use]
pub fn build_rails(
    camera_z: f32,
    columns: usize,
    time: f32,
    options: &GeometryOptions,
) -> Vec<RailInstance> {
    let geometry = CylinderGeometry {
        radius: options.rail_radius,
        length: options.rail_length,
        radial_segments: options.radial_segments,
    };
    let rotation = Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0);
    let z = RAIL_Z_AHEAD + camera_z;

    STRUCTURE_ROWS
        .iter()
        .flat_map(|&y| {
            (0..columns).map(move |index| {
                let slot = rail_slot(index, columns);
                RailInstance {
                    position: Vec3::new(slot, y, z),
                    rotation,
                    geometry,
                    color: rail_color(slot, time),
                }
            })
        })
        .collect()
}
