use serde::{Deserialize, Serialize};

use super::defaults;
use super::PerTier;

/// Drift detector configuration. Thresholds are tuned tighter for higher
/// tiers — an Inner Circle relationship drifts long before a Community one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    pub warning_thresholds: PerTier<f64>,
    pub alert_thresholds: PerTier<f64>,
    /// Cap on alerts returned per scan, to avoid overwhelming the consumer.
    pub max_alerts: usize,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            warning_thresholds: PerTier {
                community: defaults::WARNING_THRESHOLDS[0],
                close_friends: defaults::WARNING_THRESHOLDS[1],
                inner_circle: defaults::WARNING_THRESHOLDS[2],
            },
            alert_thresholds: PerTier {
                community: defaults::ALERT_THRESHOLDS[0],
                close_friends: defaults::ALERT_THRESHOLDS[1],
                inner_circle: defaults::ALERT_THRESHOLDS[2],
            },
            max_alerts: defaults::MAX_DRIFT_ALERTS,
        }
    }
}
