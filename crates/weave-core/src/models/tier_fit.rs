use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::relationship::RelationshipId;
use super::tier::Tier;

/// How well a relationship's actual rhythm matches its tier's expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FitCategory {
    /// Fewer than the minimum qualifying interactions — nothing to judge.
    InsufficientData,
    Great,
    Good,
    Mismatch,
}

/// Result of comparing a relationship's learned interval to its tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierFitAnalysis {
    pub relationship_id: RelationshipId,
    pub tier: Tier,
    /// Learned average interval, absent on insufficient data.
    pub actual_interval_days: Option<f64>,
    pub expected_interval_days: f64,
    pub category: FitCategory,
    /// [0.0, 1.0] — 1.0 is a perfect fit.
    pub fit_score: f64,
    /// Proposed one-step tier move, only on mismatch.
    pub suggested_tier: Option<Tier>,
    /// [0.0, 1.0] — grows with sample size, capped at 0.95.
    pub confidence: f64,
    /// True below 5 samples; the result is directional, not settled.
    pub preliminary: bool,
    pub sample_size: usize,
    pub reason: String,
}

impl TierFitAnalysis {
    /// The sentinel returned when history is too thin to analyze.
    pub fn insufficient(relationship_id: RelationshipId, tier: Tier, expected: f64, sample_size: usize) -> Self {
        Self {
            relationship_id,
            tier,
            actual_interval_days: None,
            expected_interval_days: expected,
            category: FitCategory::InsufficientData,
            fit_score: 0.0,
            suggested_tier: None,
            confidence: 0.0,
            preliminary: true,
            sample_size,
            reason: "Not enough logged interactions to judge rhythm yet".to_string(),
        }
    }
}
