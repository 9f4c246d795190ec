use weave_core::models::{FitCategory, Tier};

/// Raw classification of a deviation ratio (actual / expected interval).
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: FitCategory,
    pub fit_score: f64,
    pub suggested_tier: Option<Tier>,
}

/// Classify a deviation ratio for a tier.
///
/// Bands: `[0.7, 1.3]` is great; `[0.5, 2.0]` is good; everything else is
/// a mismatch scored by how many doublings off the expectation the rhythm
/// is. Inner Circle gets one exception — more contact than expected
/// (`ratio < 0.5`) is still great at the top tier.
pub fn classify(tier: Tier, deviation_ratio: f64) -> Classification {
    if (0.7..=1.3).contains(&deviation_ratio)
        || (tier == Tier::InnerCircle && deviation_ratio < 0.5)
    {
        return Classification {
            category: FitCategory::Great,
            fit_score: 1.0,
            suggested_tier: None,
        };
    }

    if (0.5..=2.0).contains(&deviation_ratio) {
        return Classification {
            category: FitCategory::Good,
            fit_score: 0.7,
            suggested_tier: None,
        };
    }

    let fit_score = (1.0 - deviation_ratio.log2().abs() / 2.0).max(0.0);
    // Too-infrequent contact moves down a tier; too-frequent moves up.
    // The boundary tiers simply have no move to offer.
    let suggested_tier = if deviation_ratio > 2.0 {
        tier.demote()
    } else {
        tier.promote()
    };

    Classification {
        category: FitCategory::Mismatch,
        fit_score,
        suggested_tier,
    }
}

/// Confidence in an analysis: grows with sample size, capped at 0.95.
pub fn confidence(sample_size: usize) -> f64 {
    (0.5 + (sample_size as f64 / 20.0) * 0.45).min(0.95)
}
