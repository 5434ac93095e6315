//! Scroll offset → camera dolly and fog density.

use serde::Serialize;

use crate::options::{CameraOptions, FogOptions};

/// Camera translation along the depth axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CameraState {
    /// World-space z of the camera eye.
    pub z: f32,
}

/// Fog parameter derived each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FogState {
    /// Exponential-squared fog density.
    pub density: f32,
}

/// Camera and fog for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RigState {
    /// Dolly position.
    pub camera: CameraState,
    /// Fog density.
    pub fog: FogState,
}

/// Maps the external offset signal and elapsed time to camera/fog state.
///
/// Offsets are not clamped. Both outputs depend on `offset²`, so negative
/// offsets mirror positive ones and never yield negative z or density.
#[derive(Debug, Clone)]
pub struct CameraRig {
    dolly_scale: f32,
    fog_initial: f32,
    fog_floor: f32,
    fog_scroll: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(&CameraOptions::default(), &FogOptions::default())
    }
}

impl CameraRig {
    /// Rig using the given dolly and fog coefficients.
    #[must_use]
    pub fn new(camera: &CameraOptions, fog: &FogOptions) -> Self {
        Self {
            dolly_scale: camera.dolly_scale,
            fog_initial: fog.initial_density,
            fog_floor: fog.floor_density,
            fog_scroll: fog.scroll_density,
        }
    }

    /// Camera z for an offset: quadratic ease-out dolly.
    #[must_use]
    pub fn camera_z(&self, offset: f32) -> f32 {
        offset * offset * self.dolly_scale
    }

    /// Fog density: a time-decaying shimmer clamped at the floor plus a
    /// scroll-driven fog-out term.
    #[must_use]
    pub fn fog_density(&self, offset: f32, time: f32) -> f32 {
        (self.fog_initial - time).max(self.fog_floor)
            + offset * offset * self.fog_scroll
    }

    /// Recompute camera and fog for this tick.
    #[must_use]
    pub fn update(&self, offset: f32, time: f32) -> RigState {
        RigState {
            camera: CameraState {
                z: self.camera_z(offset),
            },
            fog: FogState {
                density: self.fog_density(offset, time),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dolly_is_quadratic() {
        let rig = CameraRig::default();
        for (offset, z) in
            [(0.0, 0.0), (0.1, 0.1), (0.5, 2.5), (1.0, 10.0), (2.0, 40.0)]
        {
            let got = rig.update(offset, 0.0).camera.z;
            assert!((got - z).abs() < 1e-6, "offset {offset}: {got} != {z}");
            assert_eq!(got, offset * offset * 10.0);
        }
    }

    #[test]
    fn fog_decays_to_floor() {
        let rig = CameraRig::default();
        assert!((rig.fog_density(0.0, 0.0) - 0.9).abs() < 1e-6);
        assert_eq!(rig.fog_density(0.0, 2.0), 0.35);
        assert!((rig.fog_density(0.0, 0.3) - 0.6).abs() < 1e-6);
        // Exactly at the crossover both branches agree.
        assert!((rig.fog_density(0.0, 0.55) - 0.35).abs() < 1e-6);
    }

    #[test]
    fn fog_grows_with_scroll() {
        let rig = CameraRig::default();
        assert!((rig.fog_density(0.5, 2.0) - (0.35 + 0.5)).abs() < 1e-6);
        assert!((rig.fog_density(1.0, 2.0) - 2.35).abs() < 1e-6);
    }

    #[test]
    fn negative_offsets_mirror_positive() {
        let rig = CameraRig::default();
        let pos = rig.update(0.7, 1.0);
        let neg = rig.update(-0.7, 1.0);
        assert_eq!(pos, neg);
        assert!(neg.camera.z >= 0.0 && neg.fog.density >= 0.0);
    }

    #[test]
    fn coefficients_come_from_options() {
        let camera = CameraOptions {
            dolly_scale: 4.0,
            ..CameraOptions::default()
        };
        let fog = FogOptions {
            scroll_density: 0.0,
            floor_density: 0.1,
            ..FogOptions::default()
        };
        let rig = CameraRig::new(&camera, &fog);
        assert_eq!(rig.camera_z(2.0), 16.0);
        assert!((rig.fog_density(3.0, 5.0) - 0.1).abs() < 1e-6);
    }
}
