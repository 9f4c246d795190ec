//! Default configuration values. Referenced by the per-subsystem `Default`
//! impls so a zero-config engine behaves sensibly.

// Tier tables (community / close friends / inner circle)
pub const EXPECTED_INTERVAL_DAYS: [f64; 3] = [28.0, 14.0, 7.0];
pub const TOLERANCE_WINDOW_DAYS: [f64; 3] = [30.0, 14.0, 7.0];
pub const TIER_URGENCY_WEIGHTS: [f64; 3] = [1.0, 1.2, 1.5];
pub const TIER_PORTFOLIO_WEIGHTS: [f64; 3] = [1.0, 2.0, 3.0];

// Decay
pub const BASE_DECAY_RATES: [f64; 3] = [0.5, 1.0, 2.0];
pub const TOLERANCE_MULTIPLIER_WITHIN: f64 = 0.5;
pub const TOLERANCE_MULTIPLIER_PAST: f64 = 1.5;

// Drift
pub const WARNING_THRESHOLDS: [f64; 3] = [20.0, 30.0, 40.0];
pub const ALERT_THRESHOLDS: [f64; 3] = [10.0, 15.0, 20.0];
pub const MAX_DRIFT_ALERTS: usize = 10;

// Prediction
pub const BASE_ATTENTION_THRESHOLDS: [f64; 3] = [30.0, 40.0, 50.0];
pub const BLEND_BASE_WEIGHT: f64 = 0.6;
pub const BLEND_HISTORY_WEIGHT: f64 = 0.4;
pub const HISTORICAL_FACTOR: f64 = 0.5;
pub const MIN_RATED_INTERACTIONS: u32 = 5;
pub const PREDICTION_CONFIDENCE_BASE: f64 = 0.5;
pub const MAX_DAYS_UNTIL: i64 = 365;
pub const BATTERY_DEMANDS: [f64; 3] = [30.0, 50.0, 70.0];
pub const FORECAST_CONFIDENCE_BASE: f64 = 0.9;
pub const FORECAST_CONFIDENCE_SLOPE: f64 = 0.01;
pub const FORECAST_CONFIDENCE_FLOOR: f64 = 0.3;

// Suggestions
pub const SUGGESTION_COOLDOWN_DAYS: i64 = 90;
pub const UPCOMING_DRIFT_DAYS: i64 = 5;
pub const OPTIMAL_WINDOW_LOW: f64 = 0.8;
pub const OPTIMAL_WINDOW_HIGH: f64 = 1.2;
pub const PATTERN_BREAK_RATIO: f64 = 1.5;
pub const MOMENTUM_MIN_SCORE: f64 = 70.0;
pub const MOMENTUM_MIN_MOMENTUM: f64 = 10.0;
pub const MOMENTUM_RECENT_DAYS: f64 = 5.0;
pub const RECIPROCITY_HIGH: f64 = 0.8;
pub const RECIPROCITY_LOW: f64 = 0.3;
pub const BEST_DAY_WINDOW_DAYS: i64 = 3;
pub const BEST_DAY_TOLERANCE_FRACTION: f64 = 0.7;

// Composite signal weights (decay / pattern / reciprocity / battery /
// momentum / quality)
pub const COMPOSITE_WEIGHTS: [f64; 6] = [0.30, 0.25, 0.15, 0.10, 0.10, 0.10];
