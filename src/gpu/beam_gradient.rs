//! Beam gradient material: uniform layouts and a CPU mirror of the fragment
//! shader in `assets/shaders/beam_gradient.wgsl`.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::scene::{BeamInstance, FogSettings};
use crate::util::color::mix;

/// Gradient color at `n = 0` (cyan).
pub const BEAM_LOW: Vec3 = Vec3::new(0.0, 3.433_333_3, 3.75);

/// Gradient color at `n = 1` (magenta).
pub const BEAM_HIGH: Vec3 = Vec3::new(2.866_666_7, 0.283_333_33, 4.25);

/// Name of the beam shader's time uniform.
pub const TIME_UNIFORM: &str = "time";

/// Render-state flags of the beam material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamMaterial {
    /// Output goes through tone mapping.
    pub tone_mapped: bool,
    /// Shader consumes the scene fog uniform.
    pub fog: bool,
}

/// The one beam material configuration: raw colors for bloom, fogged.
pub const BEAM_MATERIAL: BeamMaterial = BeamMaterial {
    tone_mapped: false,
    fog: true,
};

/// Blend factor along the beam: `0.5 + 0.5 * sin(v_y * 2 + time)`.
#[inline]
#[must_use]
pub fn gradient_factor(v_y: f32, time: f32) -> f32 {
    0.5 + 0.5 * (v_y * 2.0 + time).sin()
}

/// Unfogged color for a fragment at local height `v_y`.
#[must_use]
pub fn shade(v_y: f32, time: f32) -> Vec3 {
    // WGSL mix(low, high, n) == high * n + low * (1 - n)
    mix(BEAM_HIGH, BEAM_LOW, gradient_factor(v_y, time))
}

/// Fog depth of a world-space point: its view-space depth in front of a
/// camera at `eye` looking down −Z. Lateral offset adds no fog.
#[inline]
#[must_use]
pub fn fog_depth(world: Vec3, eye: Vec3) -> f32 {
    eye.z - world.z
}

/// Exponential-squared fog blend, matching `tunnel::fog::apply_exp2_fog`.
#[must_use]
pub fn apply_fog(color: Vec3, depth: f32, fog: &FogSettings) -> Vec3 {
    let d = fog.density * depth;
    let factor = (1.0 - (-d * d).exp()).clamp(0.0, 1.0);
    color + (fog.color - color) * factor
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-beam uniform (`Beam` in WGSL).
pub struct BeamUniform {
    /// Model matrix (translation * XYZ rotation).
    pub model: [[f32; 4]; 4],
    /// Animation time.
    pub time: f32,
    pub(crate) _pad: [f32; 3],
}

impl BeamUniform {
    /// Uniform contents for a beam instance.
    #[must_use]
    pub fn from_instance(beam: &BeamInstance) -> Self {
        Self {
            model: model_matrix(beam.position, beam.rotation)
                .to_cols_array_2d(),
            time: beam.time_uniform,
            _pad: [0.0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Scene fog uniform (`Fog` in WGSL).
pub struct FogUniform {
    /// Fog color.
    pub color: [f32; 3],
    /// Exponential-squared density; 0 disables fog.
    pub density: f32,
}

impl FogUniform {
    /// Uniform for optional fog settings; `None` yields zero density.
    #[must_use]
    pub fn from_settings(fog: Option<&FogSettings>) -> Self {
        fog.map_or(
            Self {
                color: [0.0; 3],
                density: 0.0,
            },
            |f| Self {
                color: f.color.to_array(),
                density: f.density,
            },
        )
    }
}

/// Translation * rotation for an instance with XYZ Euler angles.
#[must_use]
pub fn model_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    let quat =
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    Mat4::from_rotation_translation(quat, position)
}
