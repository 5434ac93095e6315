use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bloom", inline)]
#[serde(default)]
/// Bloom request handed to the host renderer once, on attach.
pub struct PostProcessingOptions {
    /// Bloom strength.
    #[schemars(title = "Bloom Intensity", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub bloom_intensity: f32,
    /// Luminance above which pixels bloom.
    #[schemars(title = "Bloom Threshold", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub bloom_threshold: f32,
    /// Blur kernel size index (0 = very small .. 5 = huge).
    #[schemars(skip)]
    pub kernel_size: u32,
    /// Render-target scale for the blur (0 = renderer default).
    #[schemars(skip)]
    pub resolution_scale: f32,
    /// Use the mipmap blur chain.
    #[schemars(skip)]
    pub mipmap_blur: bool,
    /// Mip levels in the blur chain.
    #[schemars(title = "Bloom Levels", range(min = 1, max = 8))]
    pub levels: u32,
    /// Mipmap blur radius.
    #[schemars(title = "Bloom Radius", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub radius: f32,
    /// Whether the renderer needs a normal pass.
    #[schemars(skip)]
    pub normal_pass: bool,
}

impl Default for PostProcessingOptions {
    fn default() -> Self {
        Self {
            bloom_intensity: 2.5,
            bloom_threshold: 0.0,
            kernel_size: 3,
            resolution_scale: 0.0,
            mipmap_blur: true,
            levels: 3,
            radius: 0.5,
            normal_pass: false,
        }
    }
}
