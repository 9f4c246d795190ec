use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::relationship::RelationshipId;
use super::suggestion::SuggestionUrgency;
use super::tier::Tier;

/// Forecast of when a relationship will cross its attention threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DriftPrediction {
    pub relationship_id: RelationshipId,
    /// Personalized attention threshold the forecast is measured against.
    pub threshold: f64,
    /// 0 means attention is needed now.
    pub days_until_attention: i64,
    /// Expected score when the threshold is crossed.
    pub predicted_score: f64,
    pub urgency: SuggestionUrgency,
    pub confidence: f64,
}

/// The six composite-health signal sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Decay,
    Pattern,
    Reciprocity,
    Battery,
    Momentum,
    Quality,
}

/// One signal's contribution to the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignalContribution {
    pub signal: SignalKind,
    /// Normalized to [0, 100].
    pub raw: f64,
    pub weight: f64,
    pub weighted: f64,
}

/// Multi-signal health forecast for one relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeHealth {
    pub relationship_id: RelationshipId,
    /// Weighted blend of all six signals, [0, 100].
    pub score: f64,
    /// Top 3 signals by weighted contribution, descending.
    pub top_signals: Vec<SignalContribution>,
    /// All six contributions, in fixed signal order.
    pub signals: Vec<SignalContribution>,
}

/// A relationship expected to cross its threshold within the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AtRiskRelationship {
    pub relationship_id: RelationshipId,
    pub tier: Tier,
    pub current_score: f64,
    pub forecast_score: f64,
    pub days_until_attention: i64,
}

/// Network-wide health projection over a horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NetworkForecast {
    pub horizon_days: u32,
    /// Tier-weighted mean of current scores.
    pub current_health: f64,
    /// Tier-weighted mean of projected scores at the horizon.
    pub forecast_health: f64,
    pub at_risk: Vec<AtRiskRelationship>,
    /// Decreases linearly with horizon length, floored at 0.3.
    pub confidence: f64,
}
