use std::cmp::Ordering;

use weave_core::config::{CompositeWeights, PredictionConfig, TierConfig};
use weave_core::models::{CompositeHealth, SignalContribution, SignalKind};

use crate::signals::{
    self, battery_signal, momentum_signal, pattern_signal, quality_signal, reciprocity_signal,
    SignalInputs,
};

/// Blend the six signals into one composite health score with the
/// configured fixed weights, reporting the top 3 contributors.
pub fn composite_health(
    inputs: &SignalInputs<'_>,
    tiers: &TierConfig,
    prediction: &PredictionConfig,
    weights: &CompositeWeights,
) -> CompositeHealth {
    let expected = tiers.expected_interval_days.get(inputs.relationship.tier);

    let raw = [
        (SignalKind::Decay, signals::decay_signal(inputs.relationship), weights.decay),
        (
            SignalKind::Pattern,
            pattern_signal::calculate(inputs.pattern, expected),
            weights.pattern,
        ),
        (
            SignalKind::Reciprocity,
            reciprocity_signal::calculate(inputs.relationship),
            weights.reciprocity,
        ),
        (
            SignalKind::Battery,
            battery_signal::calculate(inputs.relationship, inputs.preferences, prediction),
            weights.battery,
        ),
        (
            SignalKind::Momentum,
            momentum_signal::calculate(inputs.relationship),
            weights.momentum,
        ),
        (
            SignalKind::Quality,
            quality_signal::calculate(inputs.recent_interactions),
            weights.quality,
        ),
    ];

    let contributions: Vec<SignalContribution> = raw
        .iter()
        .map(|(signal, value, weight)| SignalContribution {
            signal: *signal,
            raw: *value,
            weight: *weight,
            weighted: value * weight,
        })
        .collect();

    let total_weight = weights.total();
    let score = if total_weight > 0.0 {
        contributions.iter().map(|c| c.weighted).sum::<f64>() / total_weight
    } else {
        signals::NEUTRAL
    };
    let score = if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        signals::NEUTRAL
    };

    let mut ranked = contributions.clone();
    ranked.sort_by(|a, b| b.weighted.partial_cmp(&a.weighted).unwrap_or(Ordering::Equal));
    ranked.truncate(3);

    CompositeHealth {
        relationship_id: inputs.relationship.id.clone(),
        score,
        top_signals: ranked,
        signals: contributions,
    }
}
