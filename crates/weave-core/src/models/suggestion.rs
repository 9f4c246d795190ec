use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use super::relationship::RelationshipId;

/// The independent triggers a suggestion can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    UpcomingDrift,
    OptimalTiming,
    PatternBreak,
    MomentumOpportunity,
    ReciprocityImbalance,
    BestDayScheduling,
}

/// Urgency bucket, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionUrgency {
    Critical,
    High,
    Medium,
    Low,
}

impl SuggestionUrgency {
    /// Sort rank: lower is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            SuggestionUrgency::Critical => 0,
            SuggestionUrgency::High => 1,
            SuggestionUrgency::Medium => 2,
            SuggestionUrgency::Low => 3,
        }
    }
}

/// An actionable, ranked suggestion surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProactiveSuggestion {
    pub kind: SuggestionKind,
    pub relationship_id: RelationshipId,
    pub urgency: SuggestionUrgency,
    /// Days until the suggested action matters; negative means overdue.
    pub days_until: f64,
    pub title: String,
    pub message: String,
    pub metadata: Option<serde_json::Value>,
}

/// Lifecycle of a surfaced suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionLifecycle {
    Shown,
    Acted,
    Dismissed,
}

/// A suggestion lifecycle event, recorded through `ISuggestionLog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionEvent {
    pub relationship_id: RelationshipId,
    pub kind: SuggestionKind,
    pub lifecycle: SuggestionLifecycle,
    pub at: DateTime<Utc>,
}

/// Dismissal timestamps per (relationship, suggestion kind).
/// Passed into the generator explicitly so runs stay deterministic.
pub type DismissalMap = HashMap<(RelationshipId, SuggestionKind), DateTime<Utc>>;
