use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::interaction::InteractionCategory;
use super::tier::Tier;

/// Coarse label for how a relationship is trending, derived from signals
/// the engine already computes (drift, tier fit, reciprocity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Inner Circle, healthy and balanced.
    Anchor,
    /// Rhythm outpaces the assigned tier; a promotion candidate.
    Rising,
    /// Healthy and where it belongs.
    Steady,
    /// At or below its tier's warning threshold.
    Fading,
}

/// Severity of a portfolio imbalance, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceSeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// What kind of network-wide imbalance was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceKind {
    InnerCircleNeglect,
    TierNeglect,
    Overcommitment,
    Monotony,
    UnderActivity,
}

/// One diagnosed imbalance across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Imbalance {
    pub kind: ImbalanceKind,
    pub severity: ImbalanceSeverity,
    /// The tier concerned, where the imbalance is tier-specific.
    pub tier: Option<Tier>,
    pub message: String,
}

/// Per-tier slice of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierBreakdown {
    pub tier: Tier,
    pub count: usize,
    pub average_score: f64,
}

/// Share of recent interactions in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryShare {
    pub category: InteractionCategory,
    pub share: f64,
}

/// Count of relationships under one archetype label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchetypeShare {
    pub archetype: Archetype,
    pub count: usize,
}

/// Aggregated view of the whole relationship network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PortfolioSnapshot {
    pub generated_at: DateTime<Utc>,
    pub relationship_count: usize,
    /// Tier-weighted mean health (InnerCircle ×3, CloseFriends ×2, Community ×1).
    pub overall_health: f64,
    /// Contacted within the active window.
    pub active_count: usize,
    /// At or below the tier warning threshold.
    pub drifting_count: usize,
    /// Score at or above the thriving line.
    pub thriving_count: usize,
    pub tier_breakdown: Vec<TierBreakdown>,
    /// Completed interactions per week over the trailing activity window.
    pub interactions_per_week: f64,
    pub category_distribution: Vec<CategoryShare>,
    /// Simpson diversity of recent categories: 1 − Σ share².
    pub category_diversity: f64,
    pub archetype_distribution: Vec<ArchetypeShare>,
    /// Sorted by severity, most severe first.
    pub imbalances: Vec<Imbalance>,
}
