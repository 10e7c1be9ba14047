use serde::{Deserialize, Serialize};

pub const DEFAULT_BEAM_POWER: f64 = 1.0;

/// Construction-time settings for a [`TargetController`](super::TargetController).
///
/// Every field is optional in serialized form; absent fields take the values
/// from [`ControllerConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Beam power reported with every shot. Defaults to `1.0`.
    pub beam_power: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            beam_power: DEFAULT_BEAM_POWER,
        }
    }
}

impl ControllerConfig {
    pub fn with_beam_power(beam_power: f64) -> Self {
        Self { beam_power }
    }
}
