use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::frame_clock::DEFAULT_TIME_SCALE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Frame clock parameters.
pub struct AnimationOptions {
    /// Simulation time gained per millisecond of wall-clock time.
    #[schemars(title = "Time Scale", range(min = 0.0, max = 0.01), extend("step" = 0.0005))]
    pub time_scale: f64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
        }
    }
}
