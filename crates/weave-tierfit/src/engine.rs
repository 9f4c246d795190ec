use chrono::{DateTime, Utc};
use tracing::debug;

use weave_core::config::TierConfig;
use weave_core::constants::{MIN_PATTERN_SAMPLE, PRELIMINARY_SAMPLE};
use weave_core::models::{FitCategory, Interaction, Relationship, TierFitAnalysis};
use weave_pattern::{PatternAnalyzer, Scope};

use crate::classify;

/// Analyzes how well a relationship's rhythm fits its tier.
pub struct TierFitEngine {
    tiers: TierConfig,
}

impl TierFitEngine {
    pub fn new(tiers: TierConfig) -> Self {
        Self { tiers }
    }

    /// Analyze from raw history. Prefers a primary-only pattern; falls
    /// back to all interactions when the primary sample is too small.
    pub fn analyze(
        &self,
        relationship: &Relationship,
        history: &[Interaction],
        now: DateTime<Utc>,
    ) -> TierFitAnalysis {
        let primary = PatternAnalyzer::analyze(history, Scope::PrimaryOnly, now);
        let pattern = if primary.sample_size >= MIN_PATTERN_SAMPLE {
            primary
        } else {
            PatternAnalyzer::analyze(history, Scope::All, now)
        };
        self.analyze_with_interval(
            relationship,
            pattern.average_interval_days,
            pattern.sample_size,
        )
    }

    /// Analyze from a known (cached or freshly learned) interval.
    pub fn analyze_with_interval(
        &self,
        relationship: &Relationship,
        actual_interval_days: f64,
        sample_size: usize,
    ) -> TierFitAnalysis {
        let expected = self.tiers.expected_interval_days.get(relationship.tier);

        if sample_size < MIN_PATTERN_SAMPLE {
            return TierFitAnalysis::insufficient(
                relationship.id.clone(),
                relationship.tier,
                expected,
                sample_size,
            );
        }

        let deviation_ratio = actual_interval_days / expected;
        if !deviation_ratio.is_finite() || deviation_ratio <= 0.0 {
            // A corrupt interval must not reach the classifier.
            return TierFitAnalysis::insufficient(
                relationship.id.clone(),
                relationship.tier,
                expected,
                sample_size,
            );
        }

        let classification = classify::classify(relationship.tier, deviation_ratio);
        let analysis = TierFitAnalysis {
            relationship_id: relationship.id.clone(),
            tier: relationship.tier,
            actual_interval_days: Some(actual_interval_days),
            expected_interval_days: expected,
            category: classification.category,
            fit_score: classification.fit_score,
            suggested_tier: classification.suggested_tier,
            confidence: classify::confidence(sample_size),
            preliminary: sample_size < PRELIMINARY_SAMPLE,
            sample_size,
            reason: reason(
                relationship,
                classification.category,
                actual_interval_days,
                expected,
                classification.suggested_tier,
            ),
        };

        debug!(
            relationship = %relationship.id,
            category = ?analysis.category,
            ratio = deviation_ratio,
            "tier fit analyzed"
        );
        analysis
    }
}

impl Default for TierFitEngine {
    fn default() -> Self {
        Self::new(TierConfig::default())
    }
}

fn reason(
    relationship: &Relationship,
    category: FitCategory,
    actual: f64,
    expected: f64,
    suggested: Option<weave_core::models::Tier>,
) -> String {
    match category {
        FitCategory::InsufficientData => {
            "Not enough logged interactions to judge rhythm yet".to_string()
        }
        FitCategory::Great => format!(
            "Contact about every {actual:.0} days matches the {} cadence",
            relationship.tier
        ),
        FitCategory::Good => format!(
            "Contact about every {actual:.0} days is close to the {} cadence of {expected:.0}",
            relationship.tier
        ),
        FitCategory::Mismatch => match suggested {
            Some(tier) => format!(
                "Contact about every {actual:.0} days looks more like {tier} than {}",
                relationship.tier
            ),
            None => format!(
                "Contact about every {actual:.0} days is far from the {} cadence of {expected:.0}",
                relationship.tier
            ),
        },
    }
}
