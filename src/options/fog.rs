use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fog", inline)]
#[serde(default)]
/// Exponential-squared fog density curve.
///
/// `density = max(initial - time, floor) + scroll * offset²`
pub struct FogOptions {
    /// Density at `time = 0`; decays linearly with time.
    #[schemars(title = "Initial Density", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub initial_density: f32,
    /// Lower bound of the time-decaying term.
    #[schemars(title = "Density Floor", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub floor_density: f32,
    /// Density added per unit of `offset²` as the page scrolls away.
    #[schemars(title = "Scroll Fog", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub scroll_density: f32,
    /// Fog color (linear RGB).
    #[schemars(skip)]
    pub color: [f32; 3],
}

impl Default for FogOptions {
    fn default() -> Self {
        Self {
            initial_density: 0.9,
            floor_density: 0.35,
            scroll_density: 2.0,
            color: [0.0, 0.0, 0.0],
        }
    }
}
