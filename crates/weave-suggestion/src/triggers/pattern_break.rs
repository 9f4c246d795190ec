use chrono::{DateTime, Utc};

use weave_core::config::SuggestionConfig;
use weave_core::models::{
    Pattern, ProactiveSuggestion, Relationship, SuggestionKind, SuggestionUrgency,
};

/// Fires once the elapsed time exceeds 150% of the learned interval —
/// the rhythm has broken. The further past, the more urgent.
pub fn evaluate(
    relationship: &Relationship,
    pattern: Option<&Pattern>,
    config: &SuggestionConfig,
    now: DateTime<Utc>,
) -> Option<ProactiveSuggestion> {
    let pattern = pattern.filter(|p| p.is_reliable())?;
    let elapsed = relationship.days_since_last_interaction(now)?;

    let ratio = elapsed / pattern.average_interval_days;
    if !ratio.is_finite() || ratio <= config.pattern_break_ratio {
        return None;
    }

    let urgency = if ratio >= 3.0 {
        SuggestionUrgency::Critical
    } else if ratio >= 2.0 {
        SuggestionUrgency::High
    } else {
        SuggestionUrgency::Medium
    };

    Some(ProactiveSuggestion {
        kind: SuggestionKind::PatternBreak,
        relationship_id: relationship.id.clone(),
        urgency,
        // Negative: the usual rhythm already passed.
        days_until: pattern.average_interval_days - elapsed,
        title: format!("Your rhythm with {} broke", relationship.display_name),
        message: format!(
            "It's been {:.0} days — about {:.1}× your usual {:.0}-day rhythm",
            elapsed, ratio, pattern.average_interval_days
        ),
        metadata: None,
    })
}
