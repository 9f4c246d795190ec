use chrono::{DateTime, Utc};

use weave_core::config::DecayConfig;
use weave_core::models::Relationship;

/// Whether the relationship is still inside its tolerance window since the
/// last interaction. Never-contacted relationships count as within — there
/// is nothing to be late for yet.
pub fn within_tolerance(relationship: &Relationship, now: DateTime<Utc>) -> bool {
    let window = if relationship.tolerance_window_days.is_finite()
        && relationship.tolerance_window_days > 0.0
    {
        relationship.tolerance_window_days
    } else {
        0.0
    };
    match relationship.days_since_last_interaction(now) {
        Some(days) => days <= window,
        None => true,
    }
}

/// Effective daily decay rate: `tierBaseRate × toleranceMultiplier / resilience`.
pub fn daily_rate(relationship: &Relationship, config: &DecayConfig, now: DateTime<Utc>) -> f64 {
    let base = config.base_rates.get(relationship.tier);
    let multiplier = if within_tolerance(relationship, now) {
        config.tolerance_multiplier_within
    } else {
        config.tolerance_multiplier_past
    };
    base * multiplier / relationship.resilience_divisor()
}
