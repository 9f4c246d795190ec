use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::sync::Cache;
use tracing::debug;

use weave_core::config::EngineConfig;
use weave_core::models::{
    CompositeHealth, DriftPrediction, NetworkForecast, Pattern, Relationship,
};
use weave_decay::DecayEngine;

use crate::composite;
use crate::forecast;
use crate::network;
use crate::signals::SignalInputs;

/// Forecast cache capacity — one entry per relationship is plenty.
const CACHE_CAPACITY: u64 = 512;
/// Drift forecasts go stale as time passes even without data changes.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Prediction engine: drift forecasts (cached), composite health, and
/// network-wide projection.
pub struct PredictionEngine {
    config: EngineConfig,
    decay: DecayEngine,
    drift_cache: Cache<String, DriftPrediction>,
}

impl PredictionEngine {
    pub fn new(config: EngineConfig) -> Self {
        let decay = DecayEngine::new(config.decay.clone());
        Self {
            config,
            decay,
            drift_cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    /// Forecast when the relationship will need attention. Cached per
    /// relationship until invalidated or expired.
    pub fn predict_drift(
        &self,
        relationship: &Relationship,
        pattern: Option<&Pattern>,
        now: DateTime<Utc>,
    ) -> DriftPrediction {
        if let Some(hit) = self.drift_cache.get(&relationship.id) {
            return hit;
        }

        let prediction = forecast::predict_drift(
            relationship,
            pattern,
            &self.decay,
            &self.config.prediction,
            now,
        );
        self.drift_cache
            .insert(relationship.id.clone(), prediction.clone());
        prediction
    }

    /// Composite six-signal health for one relationship. Not cached — the
    /// inputs are already in hand and the blend is cheap.
    pub fn composite_health(&self, inputs: &SignalInputs<'_>) -> CompositeHealth {
        composite::composite_health(
            inputs,
            &self.config.tiers,
            &self.config.prediction,
            &self.config.composite,
        )
    }

    /// Network-wide forecast over a horizon.
    pub fn network_forecast(
        &self,
        relationships: &[Relationship],
        horizon_days: u32,
        now: DateTime<Utc>,
    ) -> NetworkForecast {
        network::network_forecast(
            relationships,
            &self.decay,
            &self.config.tiers,
            &self.config.prediction,
            horizon_days,
            now,
        )
    }

    /// Drop the cached forecast for one relationship.
    pub fn on_relationship_changed(&self, id: &str) {
        debug!(relationship = id, "drift forecast invalidated");
        self.drift_cache.invalidate(id);
    }

    /// Drop every cached forecast (bulk import, preference change).
    pub fn on_bulk_change(&self) {
        self.drift_cache.invalidate_all();
    }
}
