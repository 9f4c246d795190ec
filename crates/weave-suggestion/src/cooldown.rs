use chrono::{DateTime, Utc};

use weave_core::models::{DismissalMap, SuggestionKind};

/// Whether a suggestion kind is still inside its dismissal cooldown for a
/// relationship.
pub fn is_suppressed(
    dismissals: &DismissalMap,
    relationship_id: &str,
    kind: SuggestionKind,
    cooldown_days: i64,
    now: DateTime<Utc>,
) -> bool {
    dismissals
        .get(&(relationship_id.to_string(), kind))
        .map(|dismissed_at| (now - *dismissed_at).num_days() < cooldown_days)
        .unwrap_or(false)
}

/// Record a dismissal into the map the host passes back on later runs.
pub fn record_dismissal(
    dismissals: &mut DismissalMap,
    relationship_id: &str,
    kind: SuggestionKind,
    at: DateTime<Utc>,
) {
    dismissals.insert((relationship_id.to_string(), kind), at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn suppression_ends_when_the_cooldown_elapses() {
        let now = Utc::now();
        let mut dismissals = DismissalMap::new();
        record_dismissal(
            &mut dismissals,
            "r-1",
            SuggestionKind::PatternBreak,
            now - Duration::days(30),
        );

        assert!(is_suppressed(&dismissals, "r-1", SuggestionKind::PatternBreak, 90, now));
        assert!(!is_suppressed(
            &dismissals,
            "r-1",
            SuggestionKind::PatternBreak,
            90,
            now + Duration::days(61),
        ));
    }

    #[test]
    fn other_kinds_and_relationships_are_unaffected() {
        let now = Utc::now();
        let mut dismissals = DismissalMap::new();
        record_dismissal(&mut dismissals, "r-1", SuggestionKind::PatternBreak, now);

        assert!(!is_suppressed(&dismissals, "r-1", SuggestionKind::OptimalTiming, 90, now));
        assert!(!is_suppressed(&dismissals, "r-2", SuggestionKind::PatternBreak, 90, now));
    }
}
