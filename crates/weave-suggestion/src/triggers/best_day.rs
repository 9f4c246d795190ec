use chrono::{DateTime, Datelike, Utc};

use weave_core::config::SuggestionConfig;
use weave_core::models::{
    DayOfWeek, Interaction, ProactiveSuggestion, Relationship, SuggestionKind, SuggestionUrgency,
};

/// Minimum completed interactions before a network best day means anything.
const MIN_NETWORK_SAMPLE: usize = 5;

/// The network-wide best day to schedule: the weekday carrying the most
/// completed interactions across everyone. Too little history yields none.
pub fn network_best_day(all_interactions: &[Interaction]) -> Option<DayOfWeek> {
    const DAYS: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    let completed: Vec<&Interaction> =
        all_interactions.iter().filter(|i| i.is_completed()).collect();
    if completed.len() < MIN_NETWORK_SAMPLE {
        return None;
    }

    let mut counts = [0usize; 7];
    for interaction in completed {
        counts[interaction.occurred_at.weekday().num_days_from_monday() as usize] += 1;
    }
    let (best_idx, _) = counts.iter().enumerate().max_by_key(|(_, &c)| c)?;
    Some(DAYS[best_idx])
}

fn day_index(day: DayOfWeek) -> i64 {
    match day {
        DayOfWeek::Monday => 0,
        DayOfWeek::Tuesday => 1,
        DayOfWeek::Wednesday => 2,
        DayOfWeek::Thursday => 3,
        DayOfWeek::Friday => 4,
        DayOfWeek::Saturday => 5,
        DayOfWeek::Sunday => 6,
    }
}

/// Days from `now` until the next occurrence of `day` (0 = today).
fn days_ahead(now: DateTime<Utc>, day: DayOfWeek) -> i64 {
    let today = now.weekday().num_days_from_monday() as i64;
    (day_index(day) - today).rem_euclid(7)
}

/// Fires when the network's best day lands within the next few days and
/// the relationship is far enough into its tolerance window that a
/// scheduled catch-up is worth planning.
pub fn evaluate(
    relationship: &Relationship,
    best_day: Option<DayOfWeek>,
    config: &SuggestionConfig,
    now: DateTime<Utc>,
) -> Option<ProactiveSuggestion> {
    let best_day = best_day?;
    let elapsed = relationship.days_since_last_interaction(now)?;

    let window = relationship.tolerance_window_days;
    if !window.is_finite() || window <= 0.0 {
        return None;
    }
    if elapsed < window * config.best_day_tolerance_fraction {
        return None;
    }

    let ahead = days_ahead(now, best_day);
    if ahead > config.best_day_window_days {
        return None;
    }

    Some(ProactiveSuggestion {
        kind: SuggestionKind::BestDayScheduling,
        relationship_id: relationship.id.clone(),
        urgency: SuggestionUrgency::Low,
        days_until: ahead as f64,
        title: format!("Plan something with {}", relationship.display_name),
        message: format!(
            "{best_day:?} is usually your best day — a good slot to see {}",
            relationship.display_name
        ),
        metadata: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn days_ahead_wraps_the_week() {
        // Pick a known Monday.
        let monday = DateTime::parse_from_rfc3339("2026-08-03T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(monday.weekday(), Weekday::Mon);

        assert_eq!(days_ahead(monday, DayOfWeek::Monday), 0);
        assert_eq!(days_ahead(monday, DayOfWeek::Wednesday), 2);
        assert_eq!(days_ahead(monday, DayOfWeek::Sunday), 6);
    }
}
