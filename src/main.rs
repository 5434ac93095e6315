//! Headless preview: sweeps the scroll offset through a simulated session
//! and logs what the tunnel would draw.
//!
//! ```text
//! RUST_LOG=info immerse-tunnel [preset.toml]
//! ```

use std::path::Path;

use immerse_tunnel::{Options, RecordingBridge, TunnelEngine};

/// Simulated display refresh interval.
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Frames per offset step.
const FRAMES_PER_STEP: usize = 30;

fn load_options() -> Result<Options, String> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))
            .map_err(|e| format!("failed to load {path}: {e}")),
        None => Ok(Options::default()),
    }
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut engine = TunnelEngine::new(options);
    let mut bridge = RecordingBridge::new();
    engine.set_canvas_size(Some(1920), Some(1080));
    engine.attach(&mut bridge);

    let mut timestamp = 0.0;
    for step in 0..=12 {
        let offset = step as f32 * 0.1;
        engine.set_offset(offset);
        let mut last = None;
        for _ in 0..FRAMES_PER_STEP {
            last = engine.frame(timestamp, &mut bridge);
            timestamp += FRAME_MS;
        }
        if let Some(scene) = last {
            log::info!(
                "offset {offset:.1}: {:?}, t={:.2}, camera z={:.2}, fog={}, \
                 {} lights / {} beams / {} rails",
                scene.visibility,
                scene.time,
                scene.camera.z,
                scene
                    .fog
                    .map_or_else(|| "off".to_owned(), |f| format!("{:.3}", f.density)),
                scene.lights.len(),
                scene.beams.len(),
                scene.rails.len(),
            );
        }
    }

    engine.detach(&mut bridge);
    log::info!(
        "{} frames committed, {} beam uniforms released",
        bridge.frames,
        bridge.released.len()
    );
}
