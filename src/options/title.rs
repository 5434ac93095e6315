use serde::{Deserialize, Serialize};

/// Title mesh text and extrusion style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TitleOptions {
    /// Text before the line break used on narrow canvases.
    pub lead: String,
    /// Text after the line break.
    pub tail: String,
    /// Typeface JSON consumed by the host's text geometry loader.
    pub font: String,
    /// Aspect ratio above which the wide layout is used.
    pub wide_aspect: f32,
    /// Extrusion depth.
    pub height: f32,
    /// Curve tessellation segments.
    pub curve_segments: u32,
    /// Bevel thickness.
    pub bevel_thickness: f32,
    /// Bevel size.
    pub bevel_size: f32,
    /// Bevel tessellation segments.
    pub bevel_segments: u32,
    /// Material shininess (Phong).
    pub shininess: f32,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            lead: "Immerse".to_owned(),
            tail: "the Bay".to_owned(),
            font: "/fonts/Orbitron_Regular.json".to_owned(),
            wide_aspect: 1.4,
            height: 0.02,
            curve_segments: 8,
            bevel_thickness: 0.01,
            bevel_size: 0.01,
            bevel_segments: 8,
            shininess: 100.0,
        }
    }
}
