use chrono::Utc;
use proptest::prelude::*;
use test_fixtures::RelationshipBuilder;
use weave_core::config::EngineConfig;
use weave_core::models::{Tier, UserPreferences};
use weave_prediction::{PredictionEngine, SignalInputs};

fn arb_tier() -> impl Strategy<Value = Tier> {
    prop_oneof![
        Just(Tier::Community),
        Just(Tier::CloseFriends),
        Just(Tier::InnerCircle),
    ]
}

proptest! {
    // The composite score stays inside [0, 100] for any input shape.
    #[test]
    fn composite_score_is_bounded(
        score in 0.0f64..100.0,
        momentum in -60.0f64..60.0,
        tier in arb_tier(),
        battery in proptest::option::of(0u8..=100),
    ) {
        let engine = PredictionEngine::new(EngineConfig::default());
        let relationship = RelationshipBuilder::new("r-1")
            .tier(tier)
            .score(score)
            .momentum(momentum)
            .build();
        let preferences = UserPreferences {
            battery_level: battery,
            ..Default::default()
        };

        let health = engine.composite_health(&SignalInputs {
            relationship: &relationship,
            pattern: None,
            preferences: &preferences,
            recent_interactions: &[],
        });

        prop_assert!((0.0..=100.0).contains(&health.score));
        prop_assert_eq!(health.signals.len(), 6);
        prop_assert_eq!(health.top_signals.len(), 3);
    }

    // Drift forecasts are bounded and internally consistent.
    #[test]
    fn drift_forecasts_are_bounded(
        score in 0.0f64..100.0,
        tier in arb_tier(),
        days_ago in 1i64..120,
        rated in 0u32..20,
    ) {
        let engine = PredictionEngine::new(EngineConfig::default());
        let now = Utc::now();
        let relationship = RelationshipBuilder::new("r-1")
            .tier(tier)
            .score(score)
            .rated_interactions(rated)
            .last_interaction_days_ago(days_ago)
            .build();

        let prediction = engine.predict_drift(&relationship, None, now);

        prop_assert!((0..=365).contains(&prediction.days_until_attention));
        prop_assert!(prediction.predicted_score >= 0.0);
        prop_assert!((0.0..=0.95).contains(&prediction.confidence));
        prop_assert!((20.0..=80.0).contains(&prediction.threshold));
    }
}
