use chrono::Utc;
use test_fixtures::RelationshipBuilder;
use weave_core::config::{DriftConfig, PerTier, TierConfig};
use weave_core::models::{DriftStatus, Tier};
use weave_drift::DriftDetector;

// ── Threshold gates ──────────────────────────────────────────────────────

#[test]
fn scores_above_the_warning_threshold_never_alert() {
    let detector = DriftDetector::default();
    let now = Utc::now();
    // CloseFriends warning is 30.
    let relationship = RelationshipBuilder::new("r-1")
        .score(45.0)
        .last_interaction_days_ago(10)
        .build();

    assert!(detector.evaluate(&relationship, now).is_none());
}

#[test]
fn warning_band_sits_between_alert_and_warning_thresholds() {
    let detector = DriftDetector::default();
    let now = Utc::now();
    // Community: warning 20, alert 10.
    let relationship = RelationshipBuilder::new("r-1")
        .tier(Tier::Community)
        .score(15.0)
        .last_interaction_days_ago(50)
        .build();

    let alert = detector.evaluate(&relationship, now).unwrap();

    assert_eq!(alert.status, DriftStatus::Warning);
    // min(100, (100 − 15) × 1.0).
    assert_eq!(alert.urgency, 85.0);
}

#[test]
fn scores_at_or_below_the_alert_threshold_escalate() {
    let detector = DriftDetector::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1")
        .tier(Tier::InnerCircle)
        .score(18.0)
        .last_interaction_days_ago(40)
        .build();

    let alert = detector.evaluate(&relationship, now).unwrap();

    assert_eq!(alert.status, DriftStatus::Alert);
    // (100 − 18) × 1.5 = 123, capped at 100.
    assert_eq!(alert.urgency, 100.0);
}

#[test]
fn never_contacted_relationships_are_excluded() {
    let detector = DriftDetector::default();
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1").score(0.0).build();

    assert!(detector.evaluate(&relationship, now).is_none());
}

#[test]
fn adjusted_thresholds_shift_the_warning_band() {
    // Hosts can widen the net: with a Community warning of 40, a score of
    // 35 reads as a warning, not an alert.
    let drift = DriftConfig {
        warning_thresholds: PerTier {
            community: 40.0,
            close_friends: 30.0,
            inner_circle: 40.0,
        },
        ..DriftConfig::default()
    };
    let detector = DriftDetector::new(drift, TierConfig::default());
    let now = Utc::now();
    let relationship = RelationshipBuilder::new("r-1")
        .tier(Tier::Community)
        .score(35.0)
        .last_interaction_days_ago(45)
        .build();

    let alert = detector.evaluate(&relationship, now).unwrap();

    assert_eq!(alert.status, DriftStatus::Warning);
    assert_eq!(alert.urgency, 65.0);
}

// ── Scan ranking ─────────────────────────────────────────────────────────

#[test]
fn scan_ranks_by_urgency_and_caps_the_list() {
    let detector = DriftDetector::default();
    let now = Utc::now();

    let mut relationships = Vec::new();
    for i in 0..15 {
        relationships.push(
            RelationshipBuilder::new(&format!("r-{i}"))
                .tier(Tier::Community)
                .score(i as f64)
                .last_interaction_days_ago(60)
                .build(),
        );
    }

    let alerts = detector.scan(&relationships, now);

    // Community warning is 20, so every candidate qualifies, but the list
    // is capped at 10.
    assert_eq!(alerts.len(), 10);
    for pair in alerts.windows(2) {
        assert!(pair[0].urgency >= pair[1].urgency);
    }
    // The lowest scores are the most urgent and must survive the cap.
    assert_eq!(alerts[0].relationship_id, "r-0");
}

#[test]
fn higher_tiers_outrank_lower_tiers_at_equal_scores() {
    let detector = DriftDetector::default();
    let now = Utc::now();
    let relationships = vec![
        RelationshipBuilder::new("community")
            .tier(Tier::Community)
            .score(12.0)
            .last_interaction_days_ago(30)
            .build(),
        RelationshipBuilder::new("inner")
            .tier(Tier::InnerCircle)
            .score(12.0)
            .last_interaction_days_ago(30)
            .build(),
    ];

    let alerts = detector.scan(&relationships, now);

    assert_eq!(alerts[0].relationship_id, "inner");
}
