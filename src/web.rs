//! Browser entry point (feature `web`).
//!
//! The page owns the requestAnimationFrame loop and the three.js-style
//! renderer; each frame it calls [`WebTunnel::tick`] and applies the JSON
//! frame it gets back.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::bridge::RecordingBridge;
use crate::engine::TunnelEngine;
use crate::options::Options;
use crate::scene::{InstanceId, SceneDescription};

/// One frame as handed to JavaScript.
#[derive(Serialize)]
struct WebFrame<'a> {
    scene: &'a SceneDescription,
    /// Beams whose shader resources the page should dispose.
    released: &'a [InstanceId],
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Tunnel bound to a canvas element.
#[wasm_bindgen]
pub struct WebTunnel {
    engine: TunnelEngine,
    bridge: RecordingBridge,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl WebTunnel {
    /// Attach a tunnel to `canvas`, optionally configured from a TOML
    /// preset.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        options_toml: Option<String>,
    ) -> Result<WebTunnel, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let options = match options_toml {
            Some(src) => Options::from_toml(&src).map_err(js_error)?,
            None => Options::default(),
        };
        let mut engine = TunnelEngine::new(options);
        let mut bridge = RecordingBridge::new();
        engine.attach(&mut bridge);

        Ok(Self {
            engine,
            bridge,
            canvas,
        })
    }

    /// Scroll progress, `0` at the top of the page.
    pub fn set_offset(&mut self, offset: f32) {
        self.engine.set_offset(offset);
    }

    /// Bloom parameters as JSON, for the page's post-processing setup.
    pub fn bloom(&self) -> Result<String, JsValue> {
        let bloom = self
            .bridge
            .post_processing
            .as_ref()
            .ok_or_else(|| js_error("tunnel not attached"))?;
        serde_json::to_string(bloom).map_err(js_error)
    }

    /// Advance one frame using `performance.now()`. Returns the frame as
    /// JSON, or `None` after [`dispose`](Self::dispose).
    pub fn tick(&mut self) -> Result<Option<String>, JsValue> {
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .ok_or_else(|| js_error("performance.now() unavailable"))?;

        self.engine.set_canvas_size(
            Some(self.canvas.width()),
            Some(self.canvas.height()),
        );

        let Some(scene) = self.engine.frame(now, &mut self.bridge) else {
            return Ok(None);
        };
        let json = serde_json::to_string(&WebFrame {
            scene: &scene,
            released: &self.bridge.released,
        })
        .map_err(js_error)?;
        self.bridge.released.clear();
        Ok(Some(json))
    }

    /// Stop ticking and list the beams to dispose, as JSON.
    pub fn dispose(&mut self) -> Result<String, JsValue> {
        self.engine.detach(&mut self.bridge);
        let json =
            serde_json::to_string(&self.bridge.released).map_err(js_error)?;
        self.bridge.released.clear();
        Ok(json)
    }
}
