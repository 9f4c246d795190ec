use serde::{Deserialize, Serialize};

use super::defaults;

/// Suggestion generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// A dismissed suggestion kind stays quiet for this many days.
    pub cooldown_days: i64,
    /// Upcoming-drift trigger window (days until predicted attention need).
    pub upcoming_drift_days: i64,
    /// Optimal-timing band as fractions of the learned interval.
    pub optimal_window_low: f64,
    pub optimal_window_high: f64,
    /// Pattern-break fires once elapsed exceeds this multiple of the interval.
    pub pattern_break_ratio: f64,
    /// Momentum-opportunity gates.
    pub momentum_min_score: f64,
    pub momentum_min_momentum: f64,
    pub momentum_recent_days: f64,
    /// Reciprocity-imbalance gates.
    pub reciprocity_high: f64,
    pub reciprocity_low: f64,
    /// Best-day trigger: the network best day must fall within this many
    /// days, and the relationship at this fraction of its tolerance window.
    pub best_day_window_days: i64,
    pub best_day_tolerance_fraction: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            cooldown_days: defaults::SUGGESTION_COOLDOWN_DAYS,
            upcoming_drift_days: defaults::UPCOMING_DRIFT_DAYS,
            optimal_window_low: defaults::OPTIMAL_WINDOW_LOW,
            optimal_window_high: defaults::OPTIMAL_WINDOW_HIGH,
            pattern_break_ratio: defaults::PATTERN_BREAK_RATIO,
            momentum_min_score: defaults::MOMENTUM_MIN_SCORE,
            momentum_min_momentum: defaults::MOMENTUM_MIN_MOMENTUM,
            momentum_recent_days: defaults::MOMENTUM_RECENT_DAYS,
            reciprocity_high: defaults::RECIPROCITY_HIGH,
            reciprocity_low: defaults::RECIPROCITY_LOW,
            best_day_window_days: defaults::BEST_DAY_WINDOW_DAYS,
            best_day_tolerance_fraction: defaults::BEST_DAY_TOLERANCE_FRACTION,
        }
    }
}
