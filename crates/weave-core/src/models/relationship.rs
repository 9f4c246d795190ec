use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::health_score::HealthScore;
use super::initiation::InitiationStats;
use super::tier::Tier;

/// Relationship identifier (UUID v4 at rest).
pub type RelationshipId = String;

/// A tracked relationship ("friend").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Relationship {
    pub id: RelationshipId,
    pub display_name: String,
    pub tier: Tier,
    /// Current health score, maintained by the decay model.
    pub health_score: HealthScore,
    /// Decay divisor; higher values decay slower. Read through
    /// [`Relationship::resilience_divisor`], which guards bad values.
    pub resilience: f64,
    /// Short-term signed trend in contact quality/frequency,
    /// typically −30..+30.
    pub momentum_score: f64,
    pub created_at: DateTime<Utc>,
    /// Written only when an interaction completes or is deleted — never by
    /// tier changes or other bookkeeping, so drift math stays honest.
    pub last_interaction_at: Option<DateTime<Utc>>,
    /// Grace period before decay accelerates (per-tier default or learned).
    pub tolerance_window_days: f64,
    /// How many completed interactions carry a vibe rating.
    pub rated_interaction_count: u32,
    pub initiation: InitiationStats,
    /// Latest tier-fit score, if one has been computed.
    pub tier_fit_score: Option<f64>,
    pub suggested_tier: Option<Tier>,
    /// When the current tier-fit suggestion first appeared.
    pub tier_fit_since: Option<DateTime<Utc>>,
    pub last_suggestion_dismissed_at: Option<DateTime<Utc>>,
}

impl Relationship {
    /// Days elapsed since the last completed interaction, or `None` if the
    /// relationship has never been contacted.
    pub fn days_since_last_interaction(&self, now: DateTime<Utc>) -> Option<f64> {
        self.last_interaction_at
            .map(|at| ((now - at).num_seconds().max(0) as f64) / 86_400.0)
    }

    /// Resilience with corrupt values guarded to the neutral divisor 1.0.
    pub fn resilience_divisor(&self) -> f64 {
        if self.resilience.is_finite() && self.resilience > 0.0 {
            self.resilience
        } else {
            1.0
        }
    }

    /// Whether the relationship has ever been interacted with. Never-contacted
    /// relationships are excluded from drift detection.
    pub fn has_history(&self) -> bool {
        self.last_interaction_at.is_some() || self.health_score.value() > 0.0
    }
}

/// Identity equality: two relationships are equal if they share an id.
impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
