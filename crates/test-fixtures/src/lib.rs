//! Shared test builders for the weave workspace.
//!
//! Every crate's integration tests construct relationships and interaction
//! histories through these helpers so the defaults live in one place.

use chrono::{DateTime, Duration, Utc};
use weave_core::models::{
    HealthScore, InitiationStats, Initiator, Interaction, InteractionCategory, InteractionStatus,
    Relationship, Tier,
};

/// A relationship with sane defaults: CloseFriends, score 80, resilience 1.
pub fn relationship(id: &str) -> Relationship {
    let now = Utc::now();
    Relationship {
        id: id.to_string(),
        display_name: format!("Friend {id}"),
        tier: Tier::CloseFriends,
        health_score: HealthScore::new(80.0),
        resilience: 1.0,
        momentum_score: 0.0,
        created_at: now - Duration::days(365),
        last_interaction_at: None,
        tolerance_window_days: 14.0,
        rated_interaction_count: 0,
        initiation: InitiationStats::default(),
        tier_fit_score: None,
        suggested_tier: None,
        tier_fit_since: None,
        last_suggestion_dismissed_at: None,
    }
}

/// Builder over [`relationship`] for the fields tests vary.
pub struct RelationshipBuilder {
    inner: Relationship,
}

impl RelationshipBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            inner: relationship(id),
        }
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.inner.tier = tier;
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.inner.health_score = HealthScore::new(score);
        self
    }

    pub fn resilience(mut self, resilience: f64) -> Self {
        self.inner.resilience = resilience;
        self
    }

    pub fn momentum(mut self, momentum: f64) -> Self {
        self.inner.momentum_score = momentum;
        self
    }

    pub fn last_interaction_days_ago(mut self, days: i64) -> Self {
        self.inner.last_interaction_at = Some(Utc::now() - Duration::days(days));
        self
    }

    pub fn tolerance_window_days(mut self, days: f64) -> Self {
        self.inner.tolerance_window_days = days;
        self
    }

    pub fn rated_interactions(mut self, count: u32) -> Self {
        self.inner.rated_interaction_count = count;
        self
    }

    pub fn initiations(mut self, user: f64, friend: f64, streak: u32) -> Self {
        self.inner.initiation = InitiationStats {
            user_initiations: user,
            friend_initiations: friend,
            consecutive_user_streak: streak,
            ratio: weave_core::models::InitiationRatio::new(user / (user + friend)),
        };
        self
    }

    pub fn build(self) -> Relationship {
        self.inner
    }
}

/// A completed one-on-one interaction `days_ago` days before `now`.
pub fn interaction(now: DateTime<Utc>, days_ago: i64, participant: &str) -> Interaction {
    Interaction {
        id: uuid::Uuid::new_v4().to_string(),
        occurred_at: now - Duration::days(days_ago),
        status: InteractionStatus::Completed,
        category: InteractionCategory::Conversation,
        participants: vec![participant.to_string()],
        initiated_by: Some(Initiator::User),
        vibe: None,
    }
}

/// Builder over [`interaction`].
pub struct InteractionBuilder {
    inner: Interaction,
}

impl InteractionBuilder {
    pub fn new(now: DateTime<Utc>, days_ago: i64, participant: &str) -> Self {
        Self {
            inner: interaction(now, days_ago, participant),
        }
    }

    pub fn status(mut self, status: InteractionStatus) -> Self {
        self.inner.status = status;
        self
    }

    pub fn category(mut self, category: InteractionCategory) -> Self {
        self.inner.category = category;
        self
    }

    pub fn participants(mut self, ids: &[&str]) -> Self {
        self.inner.participants = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn initiated_by(mut self, initiator: Option<Initiator>) -> Self {
        self.inner.initiated_by = initiator;
        self
    }

    pub fn vibe(mut self, rating: u8) -> Self {
        self.inner.vibe = Some(rating);
        self
    }

    pub fn build(self) -> Interaction {
        self.inner
    }
}

/// `count` completed interactions at a perfectly regular cadence, newest
/// `interval_days` ago.
pub fn regular_history(
    now: DateTime<Utc>,
    participant: &str,
    count: usize,
    interval_days: i64,
) -> Vec<Interaction> {
    (0..count)
        .map(|i| interaction(now, interval_days * (i as i64 + 1), participant))
        .collect()
}

/// A history with an irregular cadence: gaps follow the given day offsets
/// back from `now`.
pub fn history_at_offsets(
    now: DateTime<Utc>,
    participant: &str,
    days_ago: &[i64],
) -> Vec<Interaction> {
    days_ago
        .iter()
        .map(|&d| interaction(now, d, participant))
        .collect()
}
