use std::collections::HashMap;

use chrono::{DateTime, Utc};

use weave_core::config::{DriftConfig, TierConfig};
use weave_core::constants::{ACTIVE_WINDOW_DAYS, ACTIVITY_WINDOW_DAYS};
use weave_core::models::{
    Archetype, ArchetypeShare, CategoryShare, HealthScore, Interaction, InteractionCategory,
    PortfolioSnapshot, Relationship, Tier, TierBreakdown,
};
use weave_drift::DriftDetector;

use crate::imbalance::{self, ImbalanceInputs};

/// Builds the network-wide portfolio snapshot.
pub struct PortfolioAnalyzer {
    tiers: TierConfig,
    detector: DriftDetector,
}

impl PortfolioAnalyzer {
    pub fn new(tiers: TierConfig, drift: DriftConfig) -> Self {
        let detector = DriftDetector::new(drift, tiers.clone());
        Self { tiers, detector }
    }

    /// Aggregate all relationships and recent interactions into one
    /// snapshot as of `now`.
    pub fn snapshot(
        &self,
        relationships: &[Relationship],
        recent_interactions: &[Interaction],
        now: DateTime<Utc>,
    ) -> PortfolioSnapshot {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut active_count = 0;
        let mut drifting_count = 0;
        let mut thriving_count = 0;
        let mut per_tier: HashMap<Tier, (usize, f64)> = HashMap::new();
        let mut archetype_counts: HashMap<Archetype, usize> = HashMap::new();

        for relationship in relationships {
            let score = relationship.health_score.value();
            let weight = self.tiers.portfolio_weights.get(relationship.tier);
            weighted_sum += score * weight;
            total_weight += weight;

            let entry = per_tier.entry(relationship.tier).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += score;

            let days_since = relationship.days_since_last_interaction(now);
            if matches!(days_since, Some(d) if d <= ACTIVE_WINDOW_DAYS as f64) {
                active_count += 1;
            }

            let drifting = self.detector.evaluate(relationship, now).is_some();
            if drifting {
                drifting_count += 1;
            }
            if relationship.health_score.is_thriving() {
                thriving_count += 1;
            }

            *archetype_counts
                .entry(archetype(relationship, drifting))
                .or_default() += 1;
        }

        let overall_health = if total_weight > 0.0 {
            let health = weighted_sum / total_weight;
            if health.is_finite() {
                health
            } else {
                0.0
            }
        } else {
            0.0
        };

        let mut tier_breakdown: Vec<TierBreakdown> = Tier::ALL
            .iter()
            .filter_map(|&tier| {
                per_tier.get(&tier).map(|&(count, sum)| TierBreakdown {
                    tier,
                    count,
                    average_score: sum / count as f64,
                })
            })
            .collect();
        tier_breakdown.reverse(); // closest tier first

        let (category_distribution, category_diversity, window_count) =
            category_stats(recent_interactions, now);
        let interactions_per_week = window_count as f64 / (ACTIVITY_WINDOW_DAYS as f64 / 7.0);

        let tier_averages = tier_breakdown
            .iter()
            .map(|b| (b.tier, b.average_score))
            .collect();
        let max_category_share = category_distribution
            .iter()
            .map(|c| c.share)
            .fold(0.0, f64::max);

        let imbalances = imbalance::detect(&ImbalanceInputs {
            tier_averages,
            relationship_count: relationships.len(),
            interactions_per_week,
            category_diversity,
            max_category_share,
        });

        let mut archetype_distribution: Vec<ArchetypeShare> = archetype_counts
            .into_iter()
            .map(|(archetype, count)| ArchetypeShare { archetype, count })
            .collect();
        archetype_distribution.sort_by(|a, b| b.count.cmp(&a.count));

        PortfolioSnapshot {
            generated_at: now,
            relationship_count: relationships.len(),
            overall_health,
            active_count,
            drifting_count,
            thriving_count,
            tier_breakdown,
            interactions_per_week,
            category_distribution,
            category_diversity,
            archetype_distribution,
            imbalances,
        }
    }
}

impl Default for PortfolioAnalyzer {
    fn default() -> Self {
        Self::new(TierConfig::default(), DriftConfig::default())
    }
}

/// Label a relationship from signals already computed elsewhere.
fn archetype(relationship: &Relationship, drifting: bool) -> Archetype {
    if drifting {
        Archetype::Fading
    } else if relationship
        .suggested_tier
        .is_some_and(|suggested| suggested > relationship.tier)
    {
        Archetype::Rising
    } else if relationship.tier == Tier::InnerCircle
        && relationship.health_score.value() >= HealthScore::THRIVING
    {
        Archetype::Anchor
    } else {
        Archetype::Steady
    }
}

/// Category shares and Simpson diversity over the trailing activity window.
fn category_stats(
    interactions: &[Interaction],
    now: DateTime<Utc>,
) -> (Vec<CategoryShare>, f64, usize) {
    let mut counts: HashMap<InteractionCategory, usize> = HashMap::new();
    let mut total = 0usize;

    for interaction in interactions {
        if !interaction.is_completed() {
            continue;
        }
        let age = (now - interaction.occurred_at).num_days();
        if !(0..=ACTIVITY_WINDOW_DAYS).contains(&age) {
            continue;
        }
        *counts.entry(interaction.category).or_default() += 1;
        total += 1;
    }

    if total == 0 {
        return (Vec::new(), 0.0, 0);
    }

    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            share: count as f64 / total as f64,
        })
        .collect();
    shares.sort_by(|a, b| {
        b.share
            .partial_cmp(&a.share)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.category.cmp(&b.category))
    });

    let diversity = 1.0 - shares.iter().map(|c| c.share * c.share).sum::<f64>();

    (shares, diversity, total)
}
