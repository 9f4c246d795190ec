use serde::{Deserialize, Serialize};

use super::defaults;
use super::PerTier;

/// Per-tier expectation tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    /// Expected contact interval per tier (days).
    pub expected_interval_days: PerTier<f64>,
    /// Default tolerance window per tier (days); individual relationships
    /// may carry a learned override.
    pub tolerance_window_days: PerTier<f64>,
    /// Drift-urgency weight per tier.
    pub urgency_weights: PerTier<f64>,
    /// Portfolio aggregation weight per tier.
    pub portfolio_weights: PerTier<f64>,
}

fn per_tier(values: [f64; 3]) -> PerTier<f64> {
    PerTier {
        community: values[0],
        close_friends: values[1],
        inner_circle: values[2],
    }
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            expected_interval_days: per_tier(defaults::EXPECTED_INTERVAL_DAYS),
            tolerance_window_days: per_tier(defaults::TOLERANCE_WINDOW_DAYS),
            urgency_weights: per_tier(defaults::TIER_URGENCY_WEIGHTS),
            portfolio_weights: per_tier(defaults::TIER_PORTFOLIO_WEIGHTS),
        }
    }
}
