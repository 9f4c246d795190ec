use chrono::Utc;
use proptest::prelude::*;
use test_fixtures::history_at_offsets;
use weave_pattern::{PatternAnalyzer, Scope};

proptest! {
    // Consistency stays in [0, 1] for any history shape.
    #[test]
    fn consistency_is_bounded(offsets in prop::collection::vec(0i64..180, 0..40)) {
        let now = Utc::now();
        let history = history_at_offsets(now, "r-1", &offsets);
        let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

        prop_assert!((0.0..=1.0).contains(&pattern.consistency));
    }

    // Whenever two or more interactions qualify, the learned (or default)
    // interval is strictly positive.
    #[test]
    fn interval_is_positive_with_enough_samples(
        offsets in prop::collection::vec(0i64..180, 2..40)
    ) {
        let now = Utc::now();
        let history = history_at_offsets(now, "r-1", &offsets);
        let pattern = PatternAnalyzer::analyze(&history, Scope::All, now);

        prop_assert!(pattern.average_interval_days > 0.0);
    }

    // Two runs over the same history agree exactly.
    #[test]
    fn analysis_is_idempotent(offsets in prop::collection::vec(0i64..180, 0..30)) {
        let now = Utc::now();
        let history = history_at_offsets(now, "r-1", &offsets);

        let first = PatternAnalyzer::analyze(&history, Scope::All, now);
        let second = PatternAnalyzer::analyze(&history, Scope::All, now);

        prop_assert_eq!(first, second);
    }
}
