//! Procedural tunnel layout.
//!
//! Every tick the [`SceneComposer`] rebuilds the full instance set from
//! scratch: lights, beams, rails and the title are plain value objects with
//! no identity beyond the tick that produced them (beam ids exist only to
//! key per-beam uniform storage in the renderer).

mod beams;
mod layout;
mod lights;
mod rails;
mod title;

pub use beams::{beam_z, build_beams, BeamInstance, BEAMS_PER_ROW};
use glam::Vec3;
pub use layout::{aspect_ratio, column_count, Visibility, DEFAULT_ASPECT};
pub use lights::{build_lights, light_color, LightInstance, LIGHTS_PER_ROW};
pub use rails::{build_rails, rail_color, rail_slot, RailInstance};
use serde::Serialize;
pub use title::{build_title, TitleLayout, TitleMesh, TitleStyle};

use crate::camera::rig::{CameraState, RigState};
use crate::options::{FogOptions, GeometryOptions, Options, TitleOptions};

// ---------------------------------------------------------------------------
// Shared value types
// ---------------------------------------------------------------------------

/// Stable per-tick identity of an instance that owns shader resources.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct InstanceId(pub u32);

/// Open cylinder shape shared by beams and rails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CylinderGeometry {
    /// Radius of both caps.
    pub radius: f32,
    /// Length along the local y axis.
    pub length: f32,
    /// Segments around the circumference.
    pub radial_segments: u32,
}

/// Fog falloff model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FogMode {
    /// Visibility falls off with `exp(-(density * distance)²)`.
    ExponentialSquared,
}

/// Fog configuration handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FogSettings {
    /// Falloff model.
    pub mode: FogMode,
    /// Fog color (linear RGB).
    pub color: Vec3,
    /// Density for the falloff model.
    pub density: f32,
}

// ---------------------------------------------------------------------------
// Scene description
// ---------------------------------------------------------------------------

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    /// Whether the tunnel is drawn.
    pub visibility: Visibility,
    /// Canvas aspect ratio the layout was built for.
    pub aspect: f32,
    /// Simulation time of this frame.
    pub time: f32,
    /// Camera dolly (reported even when retired).
    pub camera: CameraState,
    /// Fog, absent when retired.
    pub fog: Option<FogSettings>,
    /// Point lights.
    pub lights: Vec<LightInstance>,
    /// Gradient beams.
    pub beams: Vec<BeamInstance>,
    /// Colored rails.
    pub rails: Vec<RailInstance>,
    /// Title text mesh, absent when retired.
    pub title: Option<TitleMesh>,
}

impl SceneDescription {
    /// Total number of emitted lights, beams, rails and title meshes.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.lights.len()
            + self.beams.len()
            + self.rails.len()
            + usize::from(self.title.is_some())
    }
}

/// Per-tick inputs to the composer.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// External scroll offset.
    pub offset: f32,
    /// Canvas aspect ratio.
    pub aspect: f32,
    /// Simulation time.
    pub time: f32,
    /// Camera/fog state already computed for this tick.
    pub rig: RigState,
}

// ---------------------------------------------------------------------------
// Composer
// ---------------------------------------------------------------------------

/// Builds [`SceneDescription`]s from per-tick inputs.
#[derive(Debug, Clone)]
pub struct SceneComposer {
    geometry: GeometryOptions,
    title: TitleOptions,
    fog_color: Vec3,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl SceneComposer {
    /// Composer using the given instance/title/fog options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self::from_parts(&options.geometry, &options.title, &options.fog)
    }

    fn from_parts(
        geometry: &GeometryOptions,
        title: &TitleOptions,
        fog: &FogOptions,
    ) -> Self {
        Self {
            geometry: geometry.clone(),
            title: title.clone(),
            fog_color: Vec3::from_array(fog.color),
        }
    }

    /// Lay out the tunnel for one tick.
    #[must_use]
    pub fn compose(&self, input: &FrameInput) -> SceneDescription {
        let visibility = Visibility::from_offset(input.offset);
        let camera = input.rig.camera;

        if !visibility.is_active() {
            return SceneDescription {
                visibility,
                aspect: input.aspect,
                time: input.time,
                camera,
                fog: None,
                lights: Vec::new(),
                beams: Vec::new(),
                rails: Vec::new(),
                title: None,
            };
        }

        let columns = column_count(input.aspect);
        SceneDescription {
            visibility,
            aspect: input.aspect,
            time: input.time,
            camera,
            fog: Some(FogSettings {
                mode: FogMode::ExponentialSquared,
                color: self.fog_color,
                density: input.rig.fog.density,
            }),
            lights: build_lights(input.time, self.geometry.light_intensity),
            beams: build_beams(
                camera.z,
                input.aspect,
                input.time,
                &self.geometry,
            ),
            rails: build_rails(camera.z, columns, input.time, &self.geometry),
            title: Some(build_title(input.aspect, &self.title)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::rig::CameraRig;

    fn compose(offset: f32, aspect: f32, time: f32) -> SceneDescription {
        let rig = CameraRig::default().update(offset, time);
        SceneComposer::default().compose(&FrameInput {
            offset,
            aspect,
            time,
            rig,
        })
    }

    #[test]
    fn active_scene_counts() {
        for aspect in [0.6, 1.0, 1.5, 1.777, 2.0, 3.4] {
            for offset in [0.0, 0.25, 0.999] {
                let scene = compose(offset, aspect, 1.2);
                assert_eq!(scene.visibility, Visibility::Active);
                assert_eq!(scene.lights.len(), 8);
                assert_eq!(scene.beams.len(), 10);
                assert_eq!(scene.rails.len(), 2 * column_count(aspect));
                assert!(scene.title.is_some());
                assert!(scene.fog.is_some());
            }
        }
    }

    #[test]
    fn retired_scene_is_empty() {
        for offset in [1.0, 1.01, 2.0, 50.0] {
            let scene = compose(offset, 1.777, 0.5);
            assert_eq!(scene.visibility, Visibility::Retired);
            assert_eq!(scene.instance_count(), 0);
            assert!(scene.title.is_none());
            assert!(scene.fog.is_none());
            // Camera keeps dollying even though nothing is drawn.
            assert_eq!(scene.camera.z, offset * offset * 10.0);
        }
    }

    #[test]
    fn fog_is_black_exp2_with_rig_density() {
        let scene = compose(0.5, 2.0, 0.0);
        let fog = scene.fog.unwrap();
        assert_eq!(fog.mode, FogMode::ExponentialSquared);
        assert_eq!(fog.color, Vec3::ZERO);
        assert!((fog.density - (0.9 + 0.5)).abs() < 1e-6);
    }

    #[test]
    fn every_beam_gets_current_time() {
        let scene = compose(0.3, 1.5, 7.75);
        assert!(scene.beams.iter().all(|b| b.time_uniform == 7.75));
    }

    #[test]
    fn title_branches_on_aspect() {
        let wide = compose(0.0, 1.5, 0.0).title.unwrap();
        assert_eq!(wide.layout, TitleLayout::Wide);
        assert!(!wide.text.contains('\n'));

        let narrow = compose(0.0, 1.0, 0.0).title.unwrap();
        assert_eq!(narrow.layout, TitleLayout::Narrow);
        assert!(narrow.text.contains('\n'));
    }

    #[test]
    fn description_serializes_to_json() {
        let scene = compose(0.1, 2.0, 0.0);
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["visibility"], "Active");
        assert_eq!(json["lights"].as_array().unwrap().len(), 8);
        assert_eq!(json["beams"][0]["id"], 0);
    }
}
