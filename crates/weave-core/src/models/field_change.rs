use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::tier::Tier;

/// A field-level change produced by a pure update function.
///
/// Mutations never happen in place: analysis code takes an immutable
/// snapshot and returns a new snapshot plus the change list, which the
/// persistence layer applies transactionally via
/// `IRelationshipStore::apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FieldChange {
    HealthScore { from: f64, to: f64 },
    MomentumScore { from: f64, to: f64 },
    Tier { from: Tier, to: Tier },
    UserInitiations { from: f64, to: f64 },
    FriendInitiations { from: f64, to: f64 },
    ConsecutiveUserStreak { from: u32, to: u32 },
    InitiationRatio { from: f64, to: f64 },
    RatedInteractionCount { from: u32, to: u32 },
    ToleranceWindowDays { from: f64, to: f64 },
    LastInteractionAt {
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
    TierFitScore {
        from: Option<f64>,
        to: Option<f64>,
    },
    SuggestedTier {
        from: Option<Tier>,
        to: Option<Tier>,
    },
    TierFitSince {
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
    LastSuggestionDismissedAt {
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
}
