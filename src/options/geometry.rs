use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Mesh and light parameters for tunnel instances.
pub struct GeometryOptions {
    /// Point light intensity.
    #[schemars(title = "Light Intensity", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub light_intensity: f32,
    /// Beam cylinder radius.
    #[schemars(skip)]
    pub beam_radius: f32,
    /// Beam length per unit of aspect ratio.
    #[schemars(skip)]
    pub beam_length_per_aspect: f32,
    /// Rail cylinder radius.
    #[schemars(skip)]
    pub rail_radius: f32,
    /// Rail cylinder length.
    #[schemars(skip)]
    pub rail_length: f32,
    /// Radial segments of every cylinder.
    #[schemars(title = "Radial Segments", range(min = 3, max = 32))]
    pub radial_segments: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            light_intensity: 0.65,
            beam_radius: 0.002,
            beam_length_per_aspect: 6.0,
            rail_radius: 0.008,
            rail_length: 8.0,
            radial_segments: 6,
        }
    }
}
