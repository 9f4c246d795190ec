use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::relationship::RelationshipId;
use super::tier::Tier;

/// How far below its tier thresholds a drifting relationship has fallen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DriftStatus {
    Warning,
    Alert,
}

/// A relationship whose score fell to or below its tier's warning threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DriftAlert {
    pub relationship_id: RelationshipId,
    pub tier: Tier,
    pub score: f64,
    pub days_since_last_interaction: Option<f64>,
    pub status: DriftStatus,
    /// [0, 100], tier-weighted; higher tiers drift more urgently.
    pub urgency: f64,
}
