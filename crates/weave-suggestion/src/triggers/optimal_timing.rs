use chrono::{DateTime, Utc};

use weave_core::config::SuggestionConfig;
use weave_core::models::{
    Pattern, ProactiveSuggestion, Relationship, SuggestionKind, SuggestionUrgency,
};

/// Fires when the time since last contact sits inside the sweet spot of
/// the learned rhythm — 80–120% of the average interval.
pub fn evaluate(
    relationship: &Relationship,
    pattern: Option<&Pattern>,
    config: &SuggestionConfig,
    now: DateTime<Utc>,
) -> Option<ProactiveSuggestion> {
    let pattern = pattern.filter(|p| p.is_reliable())?;
    let elapsed = relationship.days_since_last_interaction(now)?;

    let ratio = elapsed / pattern.average_interval_days;
    if !ratio.is_finite() || !(config.optimal_window_low..=config.optimal_window_high).contains(&ratio)
    {
        return None;
    }

    Some(ProactiveSuggestion {
        kind: SuggestionKind::OptimalTiming,
        relationship_id: relationship.id.clone(),
        urgency: SuggestionUrgency::Medium,
        days_until: pattern.average_interval_days - elapsed,
        title: format!("Good time to reach out to {}", relationship.display_name),
        message: format!(
            "You usually connect every {:.0} days and it's been {:.0}",
            pattern.average_interval_days, elapsed
        ),
        metadata: None,
    })
}
