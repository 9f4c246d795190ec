use std::collections::HashMap;

use weave_core::models::{Imbalance, ImbalanceKind, ImbalanceSeverity, Tier};

/// Inputs the imbalance rules judge.
#[derive(Debug, Clone)]
pub struct ImbalanceInputs {
    /// Average health score per tier, only for tiers that have members.
    pub tier_averages: HashMap<Tier, f64>,
    pub relationship_count: usize,
    pub interactions_per_week: f64,
    pub category_diversity: f64,
    /// Largest single category's share of recent activity.
    pub max_category_share: f64,
}

const INNER_CIRCLE_CRITICAL: f64 = 50.0;
const INNER_CIRCLE_HIGH: f64 = 65.0;
const TIER_NEGLECT_SCORE: f64 = 50.0;
const INNER_TIER_NEGLECT_SCORE: f64 = 60.0;
const OVERCOMMITMENT_PER_WEEK: f64 = 12.0;
const MONOTONY_DIVERSITY: f64 = 0.3;
const MONOTONY_SHARE: f64 = 0.6;
const UNDER_ACTIVITY_PER_WEEK: f64 = 2.0;
const UNDER_ACTIVITY_MIN_RELATIONSHIPS: usize = 5;

/// Evaluate every imbalance rule in priority order, returning the flags
/// sorted most severe first.
pub fn detect(inputs: &ImbalanceInputs) -> Vec<Imbalance> {
    let mut flags = Vec::new();

    if let Some(&inner_avg) = inputs.tier_averages.get(&Tier::InnerCircle) {
        if inner_avg < INNER_CIRCLE_CRITICAL {
            flags.push(Imbalance {
                kind: ImbalanceKind::InnerCircleNeglect,
                severity: ImbalanceSeverity::Critical,
                tier: Some(Tier::InnerCircle),
                message: format!(
                    "Inner Circle health has collapsed to {inner_avg:.0} — your closest people need you"
                ),
            });
        } else if inner_avg < INNER_CIRCLE_HIGH {
            flags.push(Imbalance {
                kind: ImbalanceKind::InnerCircleNeglect,
                severity: ImbalanceSeverity::High,
                tier: Some(Tier::InnerCircle),
                message: format!("Inner Circle health is slipping at {inner_avg:.0}"),
            });
        }
    }

    for tier in Tier::ALL {
        let Some(&avg) = inputs.tier_averages.get(&tier) else {
            continue;
        };
        let threshold = if tier == Tier::InnerCircle {
            INNER_TIER_NEGLECT_SCORE
        } else {
            TIER_NEGLECT_SCORE
        };
        if avg < threshold {
            flags.push(Imbalance {
                kind: ImbalanceKind::TierNeglect,
                severity: ImbalanceSeverity::Medium,
                tier: Some(tier),
                message: format!("{tier} averages only {avg:.0}"),
            });
        }
    }

    if inputs.interactions_per_week > OVERCOMMITMENT_PER_WEEK {
        flags.push(Imbalance {
            kind: ImbalanceKind::Overcommitment,
            severity: ImbalanceSeverity::Medium,
            tier: None,
            message: format!(
                "{:.0} interactions a week is a lot — burnout erodes every connection",
                inputs.interactions_per_week
            ),
        });
    }

    if inputs.category_diversity < MONOTONY_DIVERSITY && inputs.max_category_share > MONOTONY_SHARE
    {
        flags.push(Imbalance {
            kind: ImbalanceKind::Monotony,
            severity: ImbalanceSeverity::Low,
            tier: None,
            message: "Most of your time together looks the same — vary the format".to_string(),
        });
    }

    if inputs.interactions_per_week < UNDER_ACTIVITY_PER_WEEK
        && inputs.relationship_count >= UNDER_ACTIVITY_MIN_RELATIONSHIPS
    {
        flags.push(Imbalance {
            kind: ImbalanceKind::UnderActivity,
            severity: ImbalanceSeverity::Medium,
            tier: None,
            message: format!(
                "Under {UNDER_ACTIVITY_PER_WEEK:.0} interactions a week across {} relationships",
                inputs.relationship_count
            ),
        });
    }

    flags.sort_by_key(|f| f.severity);
    flags
}
