use chrono::{DateTime, Utc};

use weave_core::config::{PredictionConfig, TierConfig};
use weave_core::models::{AtRiskRelationship, NetworkForecast, Relationship};
use weave_decay::DecayEngine;

use crate::forecast;

/// Project every relationship's score `horizon_days` out under its own
/// tier decay rate, aggregate tier-weighted health, and list those
/// expected to cross their personalized threshold within the horizon.
pub fn network_forecast(
    relationships: &[Relationship],
    decay: &DecayEngine,
    tiers: &TierConfig,
    config: &PredictionConfig,
    horizon_days: u32,
    now: DateTime<Utc>,
) -> NetworkForecast {
    let mut current_weighted = 0.0;
    let mut forecast_weighted = 0.0;
    let mut total_weight = 0.0;
    let mut at_risk = Vec::new();

    for relationship in relationships {
        let weight = tiers.portfolio_weights.get(relationship.tier);
        let current = relationship.health_score.value();
        let projected = decay
            .project(relationship, f64::from(horizon_days), now)
            .value();

        current_weighted += current * weight;
        forecast_weighted += projected * weight;
        total_weight += weight;

        let prediction = forecast::predict_drift(relationship, None, decay, config, now);
        if prediction.days_until_attention <= i64::from(horizon_days) {
            at_risk.push(AtRiskRelationship {
                relationship_id: relationship.id.clone(),
                tier: relationship.tier,
                current_score: current,
                forecast_score: projected,
                days_until_attention: prediction.days_until_attention,
            });
        }
    }

    at_risk.sort_by_key(|r| r.days_until_attention);

    let (current_health, forecast_health) = if total_weight > 0.0 {
        (
            current_weighted / total_weight,
            forecast_weighted / total_weight,
        )
    } else {
        (0.0, 0.0)
    };

    // Longer horizons are guessier.
    let confidence = (config.forecast_confidence_base
        - config.forecast_confidence_slope * f64::from(horizon_days))
    .max(config.forecast_confidence_floor);

    NetworkForecast {
        horizon_days,
        current_health,
        forecast_health,
        at_risk,
        confidence,
    }
}
