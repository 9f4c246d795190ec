use serde::{Deserialize, Serialize};

use super::defaults;
use super::PerTier;

/// Decay model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Base decay rate per tier (score points per day).
    pub base_rates: PerTier<f64>,
    /// Rate multiplier while still inside the tolerance window.
    pub tolerance_multiplier_within: f64,
    /// Rate multiplier once the tolerance window is exceeded.
    pub tolerance_multiplier_past: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            base_rates: PerTier {
                community: defaults::BASE_DECAY_RATES[0],
                close_friends: defaults::BASE_DECAY_RATES[1],
                inner_circle: defaults::BASE_DECAY_RATES[2],
            },
            tolerance_multiplier_within: defaults::TOLERANCE_MULTIPLIER_WITHIN,
            tolerance_multiplier_past: defaults::TOLERANCE_MULTIPLIER_PAST,
        }
    }
}
