use chrono::{DateTime, Utc};

use weave_core::config::DecayConfig;
use weave_core::models::{HealthScore, Relationship, RelationshipId};

use crate::rate;

/// Per-factor view of one relationship's decay, for debugging and UI.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayBreakdown {
    pub base_rate: f64,
    pub tolerance_multiplier: f64,
    pub resilience_divisor: f64,
    pub within_tolerance: bool,
    /// `base_rate × tolerance_multiplier / resilience_divisor`.
    pub daily_rate: f64,
}

/// Decay engine implementing the tier/tolerance/resilience rate formula.
pub struct DecayEngine {
    config: DecayConfig,
}

impl DecayEngine {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Effective daily decay rate for one relationship as of `now`.
    pub fn daily_rate(&self, relationship: &Relationship, now: DateTime<Utc>) -> f64 {
        rate::daily_rate(relationship, &self.config, now)
    }

    /// Project the score `days_ahead` days into the future under the
    /// current rate. Floors at zero; a non-finite projection leaves the
    /// score unchanged rather than propagating.
    pub fn project(
        &self,
        relationship: &Relationship,
        days_ahead: f64,
        now: DateTime<Utc>,
    ) -> HealthScore {
        let rate = self.daily_rate(relationship, now);
        relationship
            .health_score
            .updated(relationship.health_score.value() - rate * days_ahead)
    }

    /// Compute each factor individually.
    pub fn breakdown(&self, relationship: &Relationship, now: DateTime<Utc>) -> DecayBreakdown {
        let within = rate::within_tolerance(relationship, now);
        let base_rate = self.config.base_rates.get(relationship.tier);
        let tolerance_multiplier = if within {
            self.config.tolerance_multiplier_within
        } else {
            self.config.tolerance_multiplier_past
        };
        let resilience_divisor = relationship.resilience_divisor();

        DecayBreakdown {
            base_rate,
            tolerance_multiplier,
            resilience_divisor,
            within_tolerance: within,
            daily_rate: base_rate * tolerance_multiplier / resilience_divisor,
        }
    }

    /// Breakdown for a whole batch of relationships.
    pub fn process_batch(
        &self,
        relationships: &[Relationship],
        now: DateTime<Utc>,
    ) -> Vec<(RelationshipId, DecayBreakdown)> {
        relationships
            .iter()
            .map(|r| (r.id.clone(), self.breakdown(r, now)))
            .collect()
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new(DecayConfig::default())
    }
}
