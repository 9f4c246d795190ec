use chrono::{DateTime, Utc};

use weave_core::config::SuggestionConfig;
use weave_core::models::{ProactiveSuggestion, Relationship, SuggestionKind, SuggestionUrgency};

/// Fires on a hot streak: score high, momentum up, and contact recent.
/// Striking while the iron is hot deepens a connection cheaply.
pub fn evaluate(
    relationship: &Relationship,
    config: &SuggestionConfig,
    now: DateTime<Utc>,
) -> Option<ProactiveSuggestion> {
    let days_since = relationship.days_since_last_interaction(now)?;

    if relationship.health_score.value() <= config.momentum_min_score
        || relationship.momentum_score <= config.momentum_min_momentum
        || days_since > config.momentum_recent_days
    {
        return None;
    }

    Some(ProactiveSuggestion {
        kind: SuggestionKind::MomentumOpportunity,
        relationship_id: relationship.id.clone(),
        urgency: SuggestionUrgency::Medium,
        days_until: 0.0,
        title: format!("Keep the momentum with {}", relationship.display_name),
        message: format!(
            "Things are going well with {} — a quick follow-up would land",
            relationship.display_name
        ),
        metadata: None,
    })
}
