use proptest::prelude::*;
use weave_core::models::{InitiationRatio, InitiationStats};
use weave_reciprocity::balance;

proptest! {
    // The ratio is clamped to [0, 1] no matter how corrupt the counters are.
    #[test]
    fn ratio_is_always_clamped(
        user in -100.0f64..1_000.0,
        friend in -100.0f64..1_000.0,
        streak in 0u32..50,
    ) {
        let stats = InitiationStats {
            user_initiations: user,
            friend_initiations: friend,
            consecutive_user_streak: streak,
            ratio: InitiationRatio::default(),
        };
        let assessment = balance::assess(&stats);

        prop_assert!((0.0..=1.0).contains(&assessment.ratio.value()));
        prop_assert!((0.0..=1.0).contains(&assessment.balance_score));
    }

    // Severity is never declared without both the sample floor and the streak.
    #[test]
    fn severity_requires_sample_and_streak(
        user in 0.0f64..50.0,
        friend in 0.0f64..50.0,
        streak in 0u32..20,
    ) {
        let stats = InitiationStats {
            user_initiations: user,
            friend_initiations: friend,
            consecutive_user_streak: streak,
            ratio: InitiationRatio::default(),
        };
        let assessment = balance::assess(&stats);

        if assessment.severe {
            prop_assert!(stats.total() >= 5.0);
            prop_assert!(streak >= 5);
        }
    }
}
