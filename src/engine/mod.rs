//! The stateful tunnel object driven once per display refresh.
//!
//! [`TunnelEngine::tick`] is pure given the engine state: it advances the
//! clock, derives camera and fog from the offset, and lays out the scene.
//! [`TunnelEngine::frame`] wraps it with the attach/detach lifecycle and
//! commits the result through a [`RenderBridge`].

use rustc_hash::FxHashSet;

use crate::bridge::RenderBridge;
use crate::camera::rig::CameraRig;
use crate::options::Options;
use crate::scene::{
    aspect_ratio, FrameInput, InstanceId, SceneComposer, SceneDescription,
    Visibility, DEFAULT_ASPECT,
};
use crate::util::frame_clock::FrameClock;

/// Scroll-driven tunnel background.
pub struct TunnelEngine {
    options: Options,
    clock: FrameClock,
    rig: CameraRig,
    composer: SceneComposer,
    offset: f32,
    aspect: f32,
    attached: bool,
    /// Beams whose uniforms the bridge currently holds.
    live_beams: FxHashSet<InstanceId>,
    last_visibility: Option<Visibility>,
}

impl Default for TunnelEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl TunnelEngine {
    /// Detached engine at `offset = 0` with the default aspect.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            clock: FrameClock::new(options.animation.time_scale),
            rig: CameraRig::new(&options.camera, &options.fog),
            composer: SceneComposer::new(&options),
            options,
            offset: 0.0,
            aspect: DEFAULT_ASPECT,
            attached: false,
            live_beams: FxHashSet::default(),
            last_visibility: None,
        }
    }

    // -- Configuration --

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Accumulated time is kept; bloom changes reach
    /// the renderer on the next attach.
    pub fn set_options(&mut self, options: Options) {
        self.clock.set_time_scale(options.animation.time_scale);
        self.rig = CameraRig::new(&options.camera, &options.fog);
        self.composer = SceneComposer::new(&options);
        self.options = options;
    }

    // -- Inputs --

    /// Set the scroll offset consumed by subsequent ticks. Not clamped.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Current scroll offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Update the aspect ratio from canvas dimensions; missing or zero
    /// dimensions fall back to the default aspect.
    pub fn set_canvas_size(&mut self, width: Option<u32>, height: Option<u32>) {
        self.aspect = aspect_ratio(width, height);
    }

    /// Aspect ratio used for layout.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Accumulated simulation time.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.clock.elapsed() as f32
    }

    /// Whether the engine is consuming frames.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // -- Per-frame --

    /// Advance to `timestamp_ms` and lay out the scene.
    pub fn tick(&mut self, timestamp_ms: f64) -> SceneDescription {
        let time = self.clock.advance(timestamp_ms) as f32;
        let rig = self.rig.update(self.offset, time);
        let scene = self.composer.compose(&FrameInput {
            offset: self.offset,
            aspect: self.aspect,
            time,
            rig,
        });

        if self.last_visibility != Some(scene.visibility) {
            log::debug!(
                "tunnel {:?} at offset {:.3} (camera z {:.2})",
                scene.visibility,
                self.offset,
                scene.camera.z
            );
            self.last_visibility = Some(scene.visibility);
        }
        scene
    }

    /// Tick and commit through `bridge`. Returns `None` without consuming
    /// the timestamp while detached.
    ///
    /// Beams that vanish (the tunnel retiring) have their uniforms released
    /// before the new frame is committed.
    pub fn frame<B: RenderBridge + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        bridge: &mut B,
    ) -> Option<SceneDescription> {
        if !self.attached {
            log::trace!("frame at {timestamp_ms}ms ignored: detached");
            return None;
        }

        let scene = self.tick(timestamp_ms);
        let current: FxHashSet<InstanceId> =
            scene.beams.iter().map(|b| b.id).collect();
        let mut stale: Vec<InstanceId> =
            self.live_beams.difference(&current).copied().collect();
        stale.sort_unstable();
        for id in stale {
            bridge.release_uniforms(id);
        }

        bridge.commit(&scene);
        self.live_beams = current;
        Some(scene)
    }

    // -- Lifecycle --

    /// Start consuming frames. Configures bloom once and rebaselines the
    /// clock so time spent detached is skipped. No-op when already attached.
    pub fn attach<B: RenderBridge + ?Sized>(&mut self, bridge: &mut B) {
        if self.attached {
            return;
        }
        bridge.configure_post_processing(&self.options.post_processing);
        self.clock.rebaseline();
        self.attached = true;
        log::info!("tunnel attached (aspect {:.3})", self.aspect);
    }

    /// Stop consuming frames and release every beam uniform held by the
    /// bridge. No-op when already detached.
    pub fn detach<B: RenderBridge + ?Sized>(&mut self, bridge: &mut B) {
        if !self.attached {
            return;
        }
        let mut live: Vec<InstanceId> = self.live_beams.drain().collect();
        live.sort_unstable();
        let released = live.len();
        for id in live {
            bridge.release_uniforms(id);
        }
        self.attached = false;
        self.last_visibility = None;
        log::info!("tunnel detached, released {released} beam uniforms");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::RecordingBridge;
    use crate::scene::column_count;

    fn attached() -> (TunnelEngine, RecordingBridge) {
        let mut engine = TunnelEngine::default();
        let mut bridge = RecordingBridge::new();
        engine.attach(&mut bridge);
        (engine, bridge)
    }

    #[test]
    fn detached_engine_ignores_frames() {
        let mut engine = TunnelEngine::default();
        let mut bridge = RecordingBridge::new();
        assert!(engine.frame(0.0, &mut bridge).is_none());
        assert_eq!(bridge.frames, 0);
    }

    #[test]
    fn first_frame_does_not_advance_time() {
        let (mut engine, mut bridge) = attached();
        let scene = engine.frame(12_345.0, &mut bridge).unwrap();
        assert_eq!(scene.time, 0.0);
        let scene = engine.frame(12_745.0, &mut bridge).unwrap();
        assert!((scene.time - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bloom_configured_once() {
        let (mut engine, mut bridge) = attached();
        engine.attach(&mut bridge);
        for i in 0..5 {
            let _ = engine.frame(f64::from(i) * 16.0, &mut bridge);
        }
        assert_eq!(bridge.post_processing_calls, 1);
        assert_eq!(
            bridge.post_processing.as_ref().unwrap().bloom_intensity,
            2.5
        );
    }

    #[test]
    fn canvas_size_drives_layout() {
        let (mut engine, mut bridge) = attached();
        engine.set_canvas_size(Some(1920), Some(1080));
        let scene = engine.frame(0.0, &mut bridge).unwrap();
        assert_eq!(scene.rails.len(), 2 * column_count(1920.0 / 1080.0));
        assert_eq!(scene.rails.len(), 24);

        engine.set_canvas_size(None, Some(1080));
        assert_eq!(engine.aspect(), 2.0);
    }

    #[test]
    fn scroll_sweep_retires_and_releases_beams() {
        let (mut engine, mut bridge) = attached();
        engine.set_offset(0.5);
        let scene = engine.frame(0.0, &mut bridge).unwrap();
        assert_eq!(scene.beams.len(), 10);
        assert_eq!(bridge.live_uniforms(), 10);
        assert_eq!(bridge.camera_z, 2.5);

        engine.set_offset(1.0);
        let scene = engine.frame(16.0, &mut bridge).unwrap();
        assert_eq!(scene.instance_count(), 0);
        assert_eq!(bridge.live_uniforms(), 0);
        assert_eq!(bridge.released.len(), 10);
        assert_eq!(bridge.camera_z, 10.0);

        // Scrolling back up re-creates them.
        engine.set_offset(0.0);
        let _ = engine.frame(32.0, &mut bridge).unwrap();
        assert_eq!(bridge.live_uniforms(), 10);
    }

    #[test]
    fn detach_releases_everything_and_reattach_skips_gap() {
        let (mut engine, mut bridge) = attached();
        let _ = engine.frame(0.0, &mut bridge);
        let _ = engine.frame(400.0, &mut bridge);
        engine.detach(&mut bridge);
        assert!(!engine.is_attached());
        assert_eq!(bridge.live_uniforms(), 0);
        assert_eq!(bridge.released.len(), 10);

        // Detaching twice is harmless.
        engine.detach(&mut bridge);
        assert_eq!(bridge.released.len(), 10);

        engine.attach(&mut bridge);
        let scene = engine.frame(90_000.0, &mut bridge).unwrap();
        assert!((scene.time - 1.0).abs() < 1e-6);
    }

    #[test]
    fn set_options_rescales_time() {
        let (mut engine, mut bridge) = attached();
        let mut options = Options::default();
        options.animation.time_scale = 0.001;
        engine.set_options(options);
        let _ = engine.frame(0.0, &mut bridge);
        let scene = engine.frame(1_000.0, &mut bridge).unwrap();
        assert!((scene.time - 1.0).abs() < 1e-6);
    }
}
