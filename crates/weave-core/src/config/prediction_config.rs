use serde::{Deserialize, Serialize};

use super::defaults;
use super::PerTier;

/// Prediction engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Fixed per-tier base attention thresholds.
    pub base_attention_thresholds: PerTier<f64>,
    /// Weight of the base threshold in the personalized blend.
    pub blend_base_weight: f64,
    /// Weight of the score-derived threshold in the personalized blend.
    pub blend_history_weight: f64,
    /// Factor applied to the current score for the history side of the blend.
    pub historical_factor: f64,
    /// Rated interactions required before the blend kicks in; below this
    /// the base threshold is used unmodified.
    pub min_rated_interactions: u32,
    /// Starting confidence before pattern sample/consistency bonuses.
    pub confidence_base: f64,
    /// Cap on predicted days-until-attention.
    pub max_days_until: i64,
    /// Per-tier social demand the battery signal is measured against.
    pub battery_demands: PerTier<f64>,
    pub forecast_confidence_base: f64,
    pub forecast_confidence_slope: f64,
    pub forecast_confidence_floor: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_attention_thresholds: PerTier {
                community: defaults::BASE_ATTENTION_THRESHOLDS[0],
                close_friends: defaults::BASE_ATTENTION_THRESHOLDS[1],
                inner_circle: defaults::BASE_ATTENTION_THRESHOLDS[2],
            },
            blend_base_weight: defaults::BLEND_BASE_WEIGHT,
            blend_history_weight: defaults::BLEND_HISTORY_WEIGHT,
            historical_factor: defaults::HISTORICAL_FACTOR,
            min_rated_interactions: defaults::MIN_RATED_INTERACTIONS,
            confidence_base: defaults::PREDICTION_CONFIDENCE_BASE,
            max_days_until: defaults::MAX_DAYS_UNTIL,
            battery_demands: PerTier {
                community: defaults::BATTERY_DEMANDS[0],
                close_friends: defaults::BATTERY_DEMANDS[1],
                inner_circle: defaults::BATTERY_DEMANDS[2],
            },
            forecast_confidence_base: defaults::FORECAST_CONFIDENCE_BASE,
            forecast_confidence_slope: defaults::FORECAST_CONFIDENCE_SLOPE,
            forecast_confidence_floor: defaults::FORECAST_CONFIDENCE_FLOOR,
        }
    }
}
