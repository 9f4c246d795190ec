use chrono::Utc;
use test_fixtures::{regular_history, InteractionBuilder, RelationshipBuilder};
use weave_core::models::{FitCategory, Tier};
use weave_tierfit::TierFitEngine;

// ── Great / good bands ───────────────────────────────────────────────────

#[test]
fn exact_expected_interval_is_great_with_full_fit() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").tier(Tier::InnerCircle).build();
    let history = regular_history(now, "r-1", 8, 7);

    let analysis = engine.analyze(&relationship, &history, now);

    assert_eq!(analysis.category, FitCategory::Great);
    assert_eq!(analysis.fit_score, 1.0);
    assert!(analysis.suggested_tier.is_none());
    assert!(!analysis.preliminary);
}

#[test]
fn inner_circle_every_two_days_is_great_not_mismatch() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").tier(Tier::InnerCircle).build();
    let history = regular_history(now, "r-1", 10, 2);

    let analysis = engine.analyze(&relationship, &history, now);

    assert_eq!(analysis.category, FitCategory::Great);
    assert_eq!(analysis.fit_score, 1.0);
}

// ── Mismatch scenarios ───────────────────────────────────────────────────

#[test]
fn close_friends_at_six_day_rhythm_suggests_inner_circle() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").tier(Tier::CloseFriends).build();
    // 8 samples at a regular 6-day cadence: ratio 6/14 ≈ 0.43.
    let history = regular_history(now, "r-1", 8, 6);

    let analysis = engine.analyze(&relationship, &history, now);

    assert_eq!(analysis.category, FitCategory::Mismatch);
    assert_eq!(analysis.suggested_tier, Some(Tier::InnerCircle));
    assert!(!analysis.preliminary);
    assert!(analysis.confidence > 0.5);
}

#[test]
fn neglected_inner_circle_suggests_moving_down() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").tier(Tier::InnerCircle).build();
    // Every 21 days at a 7-day tier: ratio 3.0.
    let history = regular_history(now, "r-1", 6, 21);

    let analysis = engine.analyze(&relationship, &history, now);

    assert_eq!(analysis.category, FitCategory::Mismatch);
    assert_eq!(analysis.suggested_tier, Some(Tier::CloseFriends));
}

#[test]
fn community_never_demotes_below_community() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").tier(Tier::Community).build();
    // Every 84 days at a 28-day tier: ratio 3.0, but nowhere to go.
    let history = regular_history(now, "r-1", 3, 84);

    let analysis = engine.analyze(&relationship, &history, now);

    assert_eq!(analysis.category, FitCategory::Mismatch);
    assert!(analysis.suggested_tier.is_none());
}

// ── Sample-size gates ────────────────────────────────────────────────────

#[test]
fn empty_history_is_insufficient_data() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").build();

    let analysis = engine.analyze(&relationship, &[], now);

    assert_eq!(analysis.category, FitCategory::InsufficientData);
    assert_eq!(analysis.confidence, 0.0);
    assert!(analysis.suggested_tier.is_none());
    assert!(analysis.actual_interval_days.is_none());
}

#[test]
fn small_samples_are_marked_preliminary() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").build();
    let history = regular_history(now, "r-1", 3, 14);

    let analysis = engine.analyze(&relationship, &history, now);

    assert!(analysis.preliminary);
    assert_eq!(analysis.category, FitCategory::Great);
}

#[test]
fn confidence_follows_the_sample_curve() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").build();

    let eight = engine.analyze(&relationship, &regular_history(now, "r-1", 8, 14), now);
    assert!((eight.confidence - 0.68).abs() < 1e-9);

    let many = engine.analyze(&relationship, &regular_history(now, "r-1", 22, 7), now);
    assert_eq!(many.confidence, 0.95);
}

// ── Pattern source fallback ──────────────────────────────────────────────

#[test]
fn falls_back_to_all_interactions_when_primary_sample_is_thin() {
    let engine = TierFitEngine::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").tier(Tier::CloseFriends).build();

    // One primary interaction plus a regular cadence of group events:
    // the primary-only sample is too small, so the group rhythm counts.
    let mut history = vec![InteractionBuilder::new(now, 14, "r-1").build()];
    for days in [7, 21, 28, 35, 42] {
        history.push(
            InteractionBuilder::new(now, days, "r-1")
                .participants(&["r-1", "r-2", "r-3", "r-4", "r-5"])
                .build(),
        );
    }

    let analysis = engine.analyze(&relationship, &history, now);

    assert_ne!(analysis.category, FitCategory::InsufficientData);
    assert_eq!(analysis.sample_size, 6);
}
