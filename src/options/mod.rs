//! Tunnel configuration with TOML preset support.
//!
//! Everything tweakable (clock speed, camera dolly, fog curve, instance
//! geometry, title styling, bloom) lives here. Options serialize to/from TOML
//! so a landing page can ship a preset next to its bundle.

mod animation;
mod camera;
mod fog;
mod geometry;
mod post_processing;
mod title;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use fog::FogOptions;
pub use geometry::GeometryOptions;
pub use post_processing::PostProcessingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use title::TitleOptions;

use crate::error::TunnelError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[fog]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Frame clock parameters.
    pub animation: AnimationOptions,
    /// Camera projection and dolly parameters.
    pub camera: CameraOptions,
    /// Fog density curve.
    pub fog: FogOptions,
    /// Instance geometry and light parameters.
    pub geometry: GeometryOptions,
    /// Title mesh text and style.
    #[schemars(skip)]
    pub title: TitleOptions,
    /// Bloom request.
    pub post_processing: PostProcessingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TunnelError> {
        toml::from_str(content)
            .map_err(|e| TunnelError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TunnelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TunnelError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TunnelError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(TunnelError::Io)
    }
}
