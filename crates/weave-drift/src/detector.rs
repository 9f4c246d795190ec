use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use weave_core::config::{DriftConfig, TierConfig};
use weave_core::models::{DriftAlert, DriftStatus, Relationship};

/// Detects drifting relationships across the whole network.
pub struct DriftDetector {
    drift: DriftConfig,
    tiers: TierConfig,
}

impl DriftDetector {
    pub fn new(drift: DriftConfig, tiers: TierConfig) -> Self {
        Self { drift, tiers }
    }

    /// Evaluate one relationship. Returns `None` when the score sits above
    /// the tier's warning threshold, or when the relationship has never
    /// been interacted with — a brand-new entry is not "drifting".
    pub fn evaluate(&self, relationship: &Relationship, now: DateTime<Utc>) -> Option<DriftAlert> {
        if !relationship.has_history() {
            return None;
        }

        let score = relationship.health_score.value();
        let warning = self.drift.warning_thresholds.get(relationship.tier);
        if score > warning {
            return None;
        }

        let alert = self.drift.alert_thresholds.get(relationship.tier);
        let status = if score <= alert {
            DriftStatus::Alert
        } else {
            DriftStatus::Warning
        };

        let weight = self.tiers.urgency_weights.get(relationship.tier);
        let urgency = ((100.0 - score).max(0.0) * weight).min(100.0);

        Some(DriftAlert {
            relationship_id: relationship.id.clone(),
            tier: relationship.tier,
            score,
            days_since_last_interaction: relationship.days_since_last_interaction(now),
            status,
            urgency,
        })
    }

    /// Scan all relationships, most urgent first, capped at the configured
    /// maximum.
    pub fn scan(&self, relationships: &[Relationship], now: DateTime<Utc>) -> Vec<DriftAlert> {
        let mut alerts: Vec<DriftAlert> = relationships
            .iter()
            .filter_map(|r| self.evaluate(r, now))
            .collect();

        alerts.sort_by(|a, b| b.urgency.partial_cmp(&a.urgency).unwrap_or(Ordering::Equal));
        if alerts.len() > self.drift.max_alerts {
            debug!(
                total = alerts.len(),
                cap = self.drift.max_alerts,
                "drift alerts capped"
            );
            alerts.truncate(self.drift.max_alerts);
        }
        alerts
    }
}

impl Default for DriftDetector {
    fn default() -> Self {
        Self::new(DriftConfig::default(), TierConfig::default())
    }
}
