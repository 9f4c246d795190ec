use weave_core::config::PredictionConfig;
use weave_core::models::Relationship;

/// Personalized attention threshold: a 60/40 blend of the tier's base
/// threshold with a score-derived one, once the relationship has enough
/// rated history. The blend is clamped to
/// `[max(20, base − 10), min(80, base + 25)]`.
pub fn personalized_threshold(relationship: &Relationship, config: &PredictionConfig) -> f64 {
    let base = config.base_attention_thresholds.get(relationship.tier);

    if relationship.rated_interaction_count < config.min_rated_interactions {
        return base;
    }

    let history = relationship.health_score.value() * config.historical_factor;
    let blended = base * config.blend_base_weight + history * config.blend_history_weight;
    if !blended.is_finite() {
        return base;
    }

    let lo = (base - 10.0).max(20.0);
    let hi = (base + 25.0).min(80.0);
    blended.clamp(lo, hi)
}
