//! Boundary between the tunnel core and whatever draws it.
//!
//! The engine never touches a renderer directly. Each tick it hands a
//! [`SceneDescription`] to a [`RenderBridge`], whose provided
//! [`commit`](RenderBridge::commit) pushes the camera, fog and per-beam
//! uniforms before submitting the instances.

mod recording;

pub use recording::RecordingBridge;

use crate::gpu::beam_gradient::TIME_UNIFORM;
use crate::options::PostProcessingOptions;
use crate::scene::{FogSettings, InstanceId, SceneDescription};

/// Sink for per-frame scene state.
pub trait RenderBridge {
    /// Configure the bloom pass. Called once per attach.
    fn configure_post_processing(&mut self, options: &PostProcessingOptions);

    /// Move the camera along the depth axis.
    fn set_camera_z(&mut self, z: f32);

    /// Set (or clear, with `None`) the scene fog.
    fn set_fog(&mut self, fog: Option<&FogSettings>);

    /// Set a named scalar uniform on an instance's shader. Implementations
    /// ignore names they don't know.
    fn set_uniform(&mut self, instance: InstanceId, name: &str, value: f32);

    /// Free any shader resources held for an instance.
    fn release_uniforms(&mut self, instance: InstanceId);

    /// Hand the instance set to the renderer.
    fn submit_scene(&mut self, scene: &SceneDescription);

    /// Push a whole frame: camera, fog, every beam's `time` uniform, then
    /// the scene itself.
    fn commit(&mut self, scene: &SceneDescription) {
        self.set_camera_z(scene.camera.z);
        self.set_fog(scene.fog.as_ref());
        for beam in &scene.beams {
            self.set_uniform(beam.id, TIME_UNIFORM, beam.time_uniform);
        }
        self.submit_scene(scene);
    }
}
