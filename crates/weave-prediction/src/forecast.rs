use chrono::{DateTime, Utc};

use weave_core::config::PredictionConfig;
use weave_core::models::{DriftPrediction, Pattern, Relationship, SuggestionUrgency, Tier};
use weave_decay::DecayEngine;

use crate::threshold::personalized_threshold;

/// Sample-size bonus to prediction confidence at 20+ samples.
const SAMPLE_CONFIDENCE_BONUS: f64 = 0.25;
/// Consistency bonus to prediction confidence at full consistency.
const CONSISTENCY_CONFIDENCE_BONUS: f64 = 0.2;
const CONFIDENCE_CAP: f64 = 0.95;

/// Forecast when a relationship will cross its attention threshold.
pub fn predict_drift(
    relationship: &Relationship,
    pattern: Option<&Pattern>,
    decay: &DecayEngine,
    config: &PredictionConfig,
    now: DateTime<Utc>,
) -> DriftPrediction {
    let threshold = personalized_threshold(relationship, config);
    let score = relationship.health_score.value();
    let confidence = confidence(pattern, config);

    if score <= threshold {
        // Already across the line: attention is needed now.
        let urgency = if relationship.tier == Tier::InnerCircle {
            SuggestionUrgency::Critical
        } else {
            SuggestionUrgency::High
        };
        return DriftPrediction {
            relationship_id: relationship.id.clone(),
            threshold,
            days_until_attention: 0,
            predicted_score: score,
            urgency,
            confidence,
        };
    }

    let rate = decay.daily_rate(relationship, now);
    let days_until = if rate.is_finite() && rate > 0.0 {
        (((score - threshold) / rate).ceil() as i64).min(config.max_days_until)
    } else {
        config.max_days_until
    };
    let predicted_score = (score - rate * days_until as f64).max(0.0);

    DriftPrediction {
        relationship_id: relationship.id.clone(),
        threshold,
        days_until_attention: days_until,
        predicted_score,
        urgency: urgency_for(days_until),
        confidence,
    }
}

/// Urgency bucket by predicted days until attention.
fn urgency_for(days_until: i64) -> SuggestionUrgency {
    match days_until {
        d if d <= 2 => SuggestionUrgency::Critical,
        d if d <= 5 => SuggestionUrgency::High,
        d if d <= 10 => SuggestionUrgency::Medium,
        _ => SuggestionUrgency::Low,
    }
}

/// Prediction confidence: base value plus pattern sample and consistency
/// bonuses, capped at 0.95.
fn confidence(pattern: Option<&Pattern>, config: &PredictionConfig) -> f64 {
    let (sample_size, consistency) = pattern
        .map(|p| (p.sample_size, p.consistency))
        .unwrap_or((0, 0.0));
    let sample_bonus = (sample_size.min(20) as f64 / 20.0) * SAMPLE_CONFIDENCE_BONUS;
    (config.confidence_base + sample_bonus + consistency * CONSISTENCY_CONFIDENCE_BONUS)
        .min(CONFIDENCE_CAP)
}
