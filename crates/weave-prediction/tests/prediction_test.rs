use chrono::Utc;
use test_fixtures::RelationshipBuilder;
use weave_core::config::EngineConfig;
use weave_core::models::{SuggestionUrgency, Tier};
use weave_prediction::PredictionEngine;

fn engine() -> PredictionEngine {
    PredictionEngine::new(EngineConfig::default())
}

// ── Immediate need ───────────────────────────────────────────────────────

#[test]
fn score_at_the_threshold_needs_attention_now() {
    let engine = engine();
    let now = Utc::now();
    // CloseFriends base threshold 40.
    let relationship = RelationshipBuilder::new("r-1")
        .score(38.0)
        .last_interaction_days_ago(10)
        .build();

    let prediction = engine.predict_drift(&relationship, None, now);

    assert_eq!(prediction.days_until_attention, 0);
    assert_eq!(prediction.urgency, SuggestionUrgency::High);
    assert_eq!(prediction.predicted_score, 38.0);
}

#[test]
fn inner_circle_immediate_need_is_critical() {
    let engine = engine();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1")
        .tier(Tier::InnerCircle)
        .score(30.0)
        .last_interaction_days_ago(10)
        .build();

    let prediction = engine.predict_drift(&relationship, None, now);

    assert_eq!(prediction.days_until_attention, 0);
    assert_eq!(prediction.urgency, SuggestionUrgency::Critical);
}

// ── Forward projection ───────────────────────────────────────────────────

#[test]
fn days_until_follows_the_decay_rate() {
    let engine = engine();
    let now = Utc::now();
    // Past the tolerance window: rate 1.5/day. (80 − 40) / 1.5 → ceil = 27.
    let relationship = RelationshipBuilder::new("r-1")
        .score(80.0)
        .last_interaction_days_ago(20)
        .build();

    let prediction = engine.predict_drift(&relationship, None, now);

    assert_eq!(prediction.days_until_attention, 27);
    assert_eq!(prediction.urgency, SuggestionUrgency::Low);
    assert!((prediction.predicted_score - (80.0 - 1.5 * 27.0)).abs() < 1e-9);
}

#[test]
fn a_nearly_crossed_threshold_is_critical() {
    let engine = engine();
    let now = Utc::now();
    // (41 − 40) / 1.5 → ceil = 1 day out.
    let relationship = RelationshipBuilder::new("r-1")
        .score(41.0)
        .last_interaction_days_ago(20)
        .build();

    let prediction = engine.predict_drift(&relationship, None, now);

    assert_eq!(prediction.days_until_attention, 1);
    assert_eq!(prediction.urgency, SuggestionUrgency::Critical);
}

#[test]
fn confidence_rises_with_pattern_quality_and_caps() {
    let engine = engine();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1")
        .score(80.0)
        .last_interaction_days_ago(20)
        .build();

    let bare = engine.predict_drift(&relationship, None, now);
    assert_eq!(bare.confidence, 0.5);

    engine.on_relationship_changed("r-1");
    let pattern = weave_core::models::Pattern {
        average_interval_days: 7.0,
        consistency: 1.0,
        preferred_categories: vec![],
        preferred_day: None,
        sample_size: 20,
        computed_at: now,
    };
    let informed = engine.predict_drift(&relationship, Some(&pattern), now);
    assert_eq!(informed.confidence, 0.95);
}

// ── Cache behavior ───────────────────────────────────────────────────────

#[test]
fn forecasts_are_cached_until_invalidated() {
    let engine = engine();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1")
        .score(80.0)
        .last_interaction_days_ago(20)
        .build();

    let first = engine.predict_drift(&relationship, None, now);

    // The score moved, but the cached forecast still answers.
    let updated = RelationshipBuilder::new("r-1")
        .score(45.0)
        .last_interaction_days_ago(20)
        .build();
    let cached = engine.predict_drift(&updated, None, now);
    assert_eq!(cached, first);

    engine.on_relationship_changed("r-1");
    let fresh = engine.predict_drift(&updated, None, now);
    assert_ne!(fresh.days_until_attention, first.days_until_attention);
}

// ── Network forecast ─────────────────────────────────────────────────────

#[test]
fn network_forecast_projects_and_flags_at_risk() {
    let engine = engine();
    let now = Utc::now();
    let relationships = vec![
        // Healthy and slow-decaying: stays clear of its threshold.
        RelationshipBuilder::new("steady")
            .tier(Tier::Community)
            .score(90.0)
            .last_interaction_days_ago(5)
            .build(),
        // Past its window and sliding: crosses within the horizon.
        RelationshipBuilder::new("sliding")
            .score(50.0)
            .last_interaction_days_ago(25)
            .build(),
    ];

    let forecast = engine.network_forecast(&relationships, 30, now);

    assert_eq!(forecast.horizon_days, 30);
    assert!(forecast.forecast_health < forecast.current_health);
    assert_eq!(forecast.at_risk.len(), 1);
    assert_eq!(forecast.at_risk[0].relationship_id, "sliding");
    // 0.9 − 0.01 × 30 = 0.6.
    assert!((forecast.confidence - 0.6).abs() < 1e-9);
}

#[test]
fn long_horizons_floor_the_confidence() {
    let engine = engine();
    let now = Utc::now();
    let forecast = engine.network_forecast(&[], 120, now);

    assert_eq!(forecast.confidence, 0.3);
    assert!(forecast.at_risk.is_empty());
    assert_eq!(forecast.current_health, 0.0);
}
