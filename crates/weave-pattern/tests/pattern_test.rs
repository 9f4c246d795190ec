use chrono::Utc;
use test_fixtures::{history_at_offsets, regular_history, InteractionBuilder};
use weave_core::models::{InteractionCategory, InteractionStatus};
use weave_pattern::{PatternAnalyzer, Scope};

// ── Defaults on thin history ─────────────────────────────────────────────

#[test]
fn empty_history_yields_default_pattern() {
    let now = Utc::now();
    let pattern = PatternAnalyzer::analyze(&[], Scope::All, now);

    assert_eq!(pattern.average_interval_days, 14.0);
    assert_eq!(pattern.consistency, 0.0);
    assert!(pattern.preferred_categories.is_empty());
    assert!(pattern.preferred_day.is_none());
    assert_eq!(pattern.sample_size, 0);
    assert!(!pattern.is_reliable());
}

#[test]
fn single_interaction_yields_default_pattern() {
    let now = Utc::now();
    let history = regular_history(now, "r-1", 1, 7);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(pattern.average_interval_days, 14.0);
    assert_eq!(pattern.sample_size, 1);
}

#[test]
fn all_same_day_yields_default_pattern() {
    let now = Utc::now();
    let history = history_at_offsets(now, "r-1", &[3, 3, 3]);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(pattern.average_interval_days, 14.0);
    assert_eq!(pattern.consistency, 0.0);
    assert_eq!(pattern.sample_size, 3);
}

// ── Interval and consistency ─────────────────────────────────────────────

#[test]
fn perfectly_regular_history_has_full_consistency() {
    let now = Utc::now();
    let history = regular_history(now, "r-1", 8, 7);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(pattern.average_interval_days, 7.0);
    assert_eq!(pattern.consistency, 1.0);
    assert_eq!(pattern.sample_size, 8);
    assert!(pattern.is_reliable());
}

#[test]
fn irregular_history_loses_consistency() {
    let now = Utc::now();
    // Gaps of 7 and 21 days: mean 14, stddev 7 → consistency 0.5.
    let history = history_at_offsets(now, "r-1", &[2, 9, 30]);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(pattern.average_interval_days, 14.0);
    assert!((pattern.consistency - 0.5).abs() < 1e-9);
}

#[test]
fn same_day_duplicates_are_excluded_from_gaps() {
    let now = Utc::now();
    // Two interactions 5 days ago, one 12 days ago: the zero gap is
    // dropped and only the 7-day gap remains.
    let history = history_at_offsets(now, "r-1", &[5, 5, 12]);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(pattern.average_interval_days, 7.0);
    assert_eq!(pattern.consistency, 1.0);
}

// ── Qualifying filter ────────────────────────────────────────────────────

#[test]
fn planned_and_pending_interactions_do_not_qualify() {
    let now = Utc::now();
    let history = vec![
        InteractionBuilder::new(now, 3, "r-1").build(),
        InteractionBuilder::new(now, 10, "r-1")
            .status(InteractionStatus::Planned)
            .build(),
        InteractionBuilder::new(now, 17, "r-1")
            .status(InteractionStatus::PendingConfirm)
            .build(),
    ];
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(pattern.sample_size, 1);
    assert_eq!(pattern.average_interval_days, 14.0);
}

#[test]
fn interactions_outside_the_window_do_not_qualify() {
    let now = Utc::now();
    let history = history_at_offsets(now, "r-1", &[200, 210, 220]);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(pattern.sample_size, 0);
    assert_eq!(pattern.average_interval_days, 14.0);
}

#[test]
fn primary_scope_excludes_group_events() {
    let now = Utc::now();
    let mut history = regular_history(now, "r-1", 4, 7);
    history.push(
        InteractionBuilder::new(now, 10, "r-1")
            .participants(&["r-1", "r-2", "r-3", "r-4", "r-5"])
            .build(),
    );

    let primary = PatternAnalyzer::analyze(&history, Scope::PrimaryOnly, now);
    let all = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(primary.sample_size, 4);
    assert_eq!(all.sample_size, 5);
    assert_eq!(primary.average_interval_days, 7.0);
}

// ── Preferences ──────────────────────────────────────────────────────────

#[test]
fn preferred_categories_are_top_two_by_frequency() {
    let now = Utc::now();
    let mut history = Vec::new();
    for (i, category) in [
        InteractionCategory::Meal,
        InteractionCategory::Meal,
        InteractionCategory::Meal,
        InteractionCategory::Call,
        InteractionCategory::Call,
        InteractionCategory::Conversation,
    ]
    .iter()
    .enumerate()
    {
        history.push(
            InteractionBuilder::new(now, (i as i64 + 1) * 7, "r-1")
                .category(*category)
                .build(),
        );
    }
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(
        pattern.preferred_categories,
        vec![InteractionCategory::Meal, InteractionCategory::Call]
    );
}

#[test]
fn weekly_cadence_reports_a_preferred_day() {
    let now = Utc::now();
    // Every 7 days lands on the same weekday.
    let history = regular_history(now, "r-1", 6, 7);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert!(pattern.preferred_day.is_some());
}

#[test]
fn evenly_spread_days_report_no_preferred_day() {
    let now = Utc::now();
    // Seven consecutive days: each weekday carries 1/7 < 30%.
    let history = history_at_offsets(now, "r-1", &[1, 2, 3, 4, 5, 6, 7]);
    let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert!(pattern.preferred_day.is_none());
}

// ── Idempotence ──────────────────────────────────────────────────────────

#[test]
fn analysis_is_idempotent_over_unchanged_history() {
    let now = Utc::now();
    let history = history_at_offsets(now, "r-1", &[2, 9, 16, 30, 44]);

    let first = PatternAnalyzer::analyze(&history, Scope::All, now);
    let second = PatternAnalyzer::analyze(&history, Scope::All, now);

    assert_eq!(first, second);
}
