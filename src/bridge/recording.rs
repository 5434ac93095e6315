use rustc_hash::FxHashMap;

use super::RenderBridge;
use crate::gpu::beam_gradient::TIME_UNIFORM;
use crate::options::PostProcessingOptions;
use crate::scene::{FogSettings, InstanceId, SceneDescription};

/// In-memory bridge that keeps the latest value of everything pushed to it.
///
/// Used by the headless preview and anywhere a frame needs inspecting
/// without a GPU.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    /// Bloom configuration, once configured.
    pub post_processing: Option<PostProcessingOptions>,
    /// Number of `configure_post_processing` calls.
    pub post_processing_calls: usize,
    /// Last camera z.
    pub camera_z: f32,
    /// Last fog.
    pub fog: Option<FogSettings>,
    /// Live `time` uniform per instance.
    pub time_uniforms: FxHashMap<InstanceId, f32>,
    /// Instances whose uniforms were released, in release order.
    pub released: Vec<InstanceId>,
    /// Last submitted scene.
    pub last_scene: Option<SceneDescription>,
    /// Number of submitted scenes.
    pub frames: usize,
}

impl RecordingBridge {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances currently holding uniforms.
    #[must_use]
    pub fn live_uniforms(&self) -> usize {
        self.time_uniforms.len()
    }
}

impl RenderBridge for RecordingBridge {
    fn configure_post_processing(&mut self, options: &PostProcessingOptions) {
        self.post_processing = Some(options.clone());
        self.post_processing_calls += 1;
    }

    fn set_camera_z(&mut self, z: f32) {
        self.camera_z = z;
    }

    fn set_fog(&mut self, fog: Option<&FogSettings>) {
        self.fog = fog.copied();
    }

    fn set_uniform(&mut self, instance: InstanceId, name: &str, value: f32) {
        if name == TIME_UNIFORM {
            let _ = self.time_uniforms.insert(instance, value);
        } else {
            log::warn!("ignoring unknown uniform '{name}' on {instance:?}");
        }
    }

    fn release_uniforms(&mut self, instance: InstanceId) {
        let _ = self.time_uniforms.remove(&instance);
        self.released.push(instance);
    }

    fn submit_scene(&mut self, scene: &SceneDescription) {
        self.last_scene = Some(scene.clone());
        self.frames += 1;
    }
}
