use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use weave_core::config::EngineConfig;
use weave_core::constants::MIN_PATTERN_SAMPLE;
use weave_core::errors::{StoreError, WeaveResult};
use weave_core::models::{
    CompositeHealth, DismissalMap, DriftAlert, DriftPrediction, FieldChange, FitCategory,
    Initiator, Interaction, NetworkForecast, Pattern, PortfolioSnapshot, ProactiveSuggestion,
    Relationship, RelationshipId, SuggestionEvent, SuggestionKind, SuggestionLifecycle, Tier,
    TierFitAnalysis, UserPreferences,
};
use weave_core::traits::{IInteractionStore, IRelationshipStore, ISuggestionLog};
use weave_pattern::{PatternAnalyzer, Scope};
use weave_portfolio::PortfolioAnalyzer;
use weave_prediction::{PredictionEngine, SignalInputs};
use weave_suggestion::triggers::best_day;
use weave_suggestion::{SuggestionContext, SuggestionEngine};
use weave_tierfit::TierFitEngine;

/// Everything the engine derived for one relationship in one pass.
#[derive(Debug, Clone)]
pub struct RelationshipInsights {
    pub relationship: Relationship,
    pub pattern: Pattern,
    pub tier_fit: TierFitAnalysis,
    pub prediction: DriftPrediction,
    pub composite: CompositeHealth,
    pub drift_alert: Option<DriftAlert>,
    /// Generation this was computed under; stale generations should be
    /// discarded by the consumer.
    pub generation: u64,
}

/// Facade wiring the host's stores to the pure analyzers.
///
/// Read failures degrade to neutral/empty results (logged); write
/// failures on user-initiated actions (tier change, dismissal) propagate
/// to the caller.
pub struct WeaveEngine {
    config: EngineConfig,
    relationships: Arc<dyn IRelationshipStore>,
    interactions: Arc<dyn IInteractionStore>,
    suggestion_log: Arc<dyn ISuggestionLog>,
    tier_fit: TierFitEngine,
    prediction: PredictionEngine,
    suggestions: SuggestionEngine,
    portfolio: PortfolioAnalyzer,
    detector: weave_drift::DriftDetector,
    generation: AtomicU64,
}

impl WeaveEngine {
    pub fn new(
        config: EngineConfig,
        relationships: Arc<dyn IRelationshipStore>,
        interactions: Arc<dyn IInteractionStore>,
        suggestion_log: Arc<dyn ISuggestionLog>,
    ) -> Self {
        let tier_fit = TierFitEngine::new(config.tiers.clone());
        let prediction = PredictionEngine::new(config.clone());
        let suggestions = SuggestionEngine::new(config.suggestions.clone());
        let portfolio = PortfolioAnalyzer::new(config.tiers.clone(), config.drift.clone());
        let detector = weave_drift::DriftDetector::new(config.drift.clone(), config.tiers.clone());
        Self {
            config,
            relationships,
            interactions,
            suggestion_log,
            tier_fit,
            prediction,
            suggestions,
            portfolio,
            detector,
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── Stale-computation bookkeeping ────────────────────────────────────

    /// Mark that newer input data exists. Computations started before this
    /// call carry an older generation and should be discarded.
    pub fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    // ── Recomputation ────────────────────────────────────────────────────

    /// Recompute the full dependent-analysis chain for one relationship:
    /// pattern → tier fit → prediction → composite, plus drift state.
    /// Also refreshes the tier-fit bookkeeping on the record; that write
    /// is background maintenance, so a failure is logged, not surfaced.
    pub fn recompute_for(
        &self,
        id: &str,
        preferences: &UserPreferences,
        now: DateTime<Utc>,
    ) -> Option<RelationshipInsights> {
        let generation = self.generation.load(Ordering::SeqCst);

        let relationship = match self.relationships.get(id) {
            Ok(Some(r)) => r,
            Ok(None) => {
                warn!(relationship = id, "recompute skipped: record not found");
                return None;
            }
            Err(err) => {
                warn!(relationship = id, %err, "recompute skipped: read failed");
                return None;
            }
        };
        let history = match self.interactions.interactions_for_relationship(id) {
            Ok(h) => h,
            Err(err) => {
                warn!(relationship = id, %err, "history read failed, analyzing empty");
                Vec::new()
            }
        };

        let pattern = learn_pattern(&history, now);
        let tier_fit = self.tier_fit.analyze(&relationship, &history, now);

        // Fresh inputs invalidate any cached forecast first.
        self.prediction.on_relationship_changed(id);
        let prediction = self.prediction.predict_drift(&relationship, Some(&pattern), now);
        let composite = self.prediction.composite_health(&SignalInputs {
            relationship: &relationship,
            pattern: Some(&pattern),
            preferences,
            recent_interactions: &history,
        });
        let drift_alert = self.detector.evaluate(&relationship, now);

        let bookkeeping = tier_fit_changes(&relationship, &tier_fit, now);
        if !bookkeeping.is_empty() {
            if let Err(err) = self.relationships.apply(id, &bookkeeping) {
                warn!(relationship = id, %err, "tier-fit bookkeeping write failed");
            }
        }

        Some(RelationshipInsights {
            relationship,
            pattern,
            tier_fit,
            prediction,
            composite,
            drift_alert,
            generation,
        })
    }

    /// Recompute every relationship.
    pub fn recompute_all(
        &self,
        preferences: &UserPreferences,
        now: DateTime<Utc>,
    ) -> Vec<RelationshipInsights> {
        let relationships = self.list_or_empty();
        relationships
            .iter()
            .filter_map(|r| self.recompute_for(&r.id, preferences, now))
            .collect()
    }

    // ── Aggregates ───────────────────────────────────────────────────────

    /// Generate the ranked suggestion list from current state.
    pub fn generate_suggestions(
        &self,
        preferences: &UserPreferences,
        dismissals: &DismissalMap,
        now: DateTime<Utc>,
    ) -> Vec<ProactiveSuggestion> {
        let relationships = self.list_or_empty();

        let mut patterns: HashMap<RelationshipId, Pattern> = HashMap::new();
        let mut predictions: HashMap<RelationshipId, DriftPrediction> = HashMap::new();
        let mut all_interactions: Vec<Interaction> = Vec::new();
        let mut seen_interactions: HashSet<String> = HashSet::new();

        for relationship in &relationships {
            let history = match self.interactions.interactions_for_relationship(&relationship.id)
            {
                Ok(h) => h,
                Err(err) => {
                    warn!(relationship = %relationship.id, %err, "history read failed");
                    Vec::new()
                }
            };
            let pattern = learn_pattern(&history, now);
            let prediction = self.prediction.predict_drift(relationship, Some(&pattern), now);
            patterns.insert(relationship.id.clone(), pattern);
            predictions.insert(relationship.id.clone(), prediction);
            for interaction in history {
                if seen_interactions.insert(interaction.id.clone()) {
                    all_interactions.push(interaction);
                }
            }
        }

        let best_day = best_day::network_best_day(&all_interactions);

        self.suggestions.generate(&SuggestionContext {
            relationships: &relationships,
            patterns: &patterns,
            predictions: &predictions,
            preferences,
            dismissals,
            best_day,
            now,
        })
    }

    /// Drift scan across the network.
    pub fn drift_alerts(&self, now: DateTime<Utc>) -> Vec<DriftAlert> {
        self.detector.scan(&self.list_or_empty(), now)
    }

    /// Portfolio snapshot; the interactions of every relationship feed the
    /// activity and category statistics.
    pub fn portfolio_snapshot(&self, now: DateTime<Utc>) -> PortfolioSnapshot {
        let relationships = self.list_or_empty();
        let mut all_interactions: Vec<Interaction> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for relationship in &relationships {
            if let Ok(history) =
                self.interactions.interactions_for_relationship(&relationship.id)
            {
                for interaction in history {
                    if seen.insert(interaction.id.clone()) {
                        all_interactions.push(interaction);
                    }
                }
            }
        }
        self.portfolio.snapshot(&relationships, &all_interactions, now)
    }

    pub fn network_forecast(&self, horizon_days: u32, now: DateTime<Utc>) -> NetworkForecast {
        self.prediction
            .network_forecast(&self.list_or_empty(), horizon_days, now)
    }

    // ── User-initiated writes ────────────────────────────────────────────

    /// Apply a tier change. Store failures propagate: silently losing a
    /// user's decision is worse than surfacing the error.
    pub fn apply_tier_change(&self, id: &str, new_tier: Tier) -> WeaveResult<()> {
        let relationship = self.get_required(id)?;
        if relationship.tier == new_tier {
            return Ok(());
        }

        let changes = vec![
            FieldChange::Tier {
                from: relationship.tier,
                to: new_tier,
            },
            FieldChange::SuggestedTier {
                from: relationship.suggested_tier,
                to: None,
            },
            FieldChange::TierFitSince {
                from: relationship.tier_fit_since,
                to: None,
            },
        ];
        self.relationships.apply(id, &changes)?;
        self.prediction.on_relationship_changed(id);
        info!(relationship = id, tier = %new_tier, "tier changed");
        Ok(())
    }

    /// Dismiss a suggestion kind for a relationship. Store failures
    /// propagate.
    pub fn dismiss_suggestion(
        &self,
        id: &str,
        kind: SuggestionKind,
        now: DateTime<Utc>,
    ) -> WeaveResult<()> {
        let relationship = self.get_required(id)?;
        self.relationships.apply(
            id,
            &[FieldChange::LastSuggestionDismissedAt {
                from: relationship.last_suggestion_dismissed_at,
                to: Some(now),
            }],
        )?;
        self.suggestion_log.record(&SuggestionEvent {
            relationship_id: id.to_string(),
            kind,
            lifecycle: SuggestionLifecycle::Dismissed,
            at: now,
        })?;
        Ok(())
    }

    /// Record a shown/acted lifecycle event.
    pub fn record_suggestion_event(&self, event: &SuggestionEvent) -> WeaveResult<()> {
        self.suggestion_log.record(event)
    }

    /// After an interaction is logged against a relationship: update the
    /// reciprocity counters and the last-contact stamp. Logging is a
    /// user-initiated action, so store failures propagate.
    pub fn record_interaction_logged(
        &self,
        relationship_id: &str,
        initiator: Option<Initiator>,
        occurred_at: DateTime<Utc>,
    ) -> WeaveResult<()> {
        let relationship = self.get_required(relationship_id)?;

        let mut changes = Vec::new();
        if let Some(initiator) = initiator {
            let (_, initiation_changes) =
                weave_reciprocity::record_initiation(&relationship, initiator);
            changes.extend(initiation_changes);
        }
        if relationship
            .last_interaction_at
            .map_or(true, |at| occurred_at > at)
        {
            changes.push(FieldChange::LastInteractionAt {
                from: relationship.last_interaction_at,
                to: Some(occurred_at),
            });
        }

        if !changes.is_empty() {
            self.relationships.apply(relationship_id, &changes)?;
        }
        self.prediction.on_relationship_changed(relationship_id);
        Ok(())
    }

    /// After an interaction is deleted: reverse its initiation credit and
    /// re-derive the last-contact stamp from the remaining history.
    pub fn record_interaction_deleted(
        &self,
        relationship_id: &str,
        initiator: Option<Initiator>,
    ) -> WeaveResult<()> {
        let relationship = self.get_required(relationship_id)?;

        let mut changes = Vec::new();
        if let Some(initiator) = initiator {
            let (_, initiation_changes) =
                weave_reciprocity::remove_initiation(&relationship, initiator);
            changes.extend(initiation_changes);
        }

        let latest = match self
            .interactions
            .interactions_for_relationship(relationship_id)
        {
            Ok(history) => history
                .iter()
                .filter(|i| i.is_completed())
                .map(|i| i.occurred_at)
                .max(),
            Err(err) => {
                // Can't re-derive the stamp; keep what the record has.
                warn!(relationship = relationship_id, %err, "history read failed");
                relationship.last_interaction_at
            }
        };
        if latest != relationship.last_interaction_at {
            changes.push(FieldChange::LastInteractionAt {
                from: relationship.last_interaction_at,
                to: latest,
            });
        }

        if !changes.is_empty() {
            self.relationships.apply(relationship_id, &changes)?;
        }
        self.prediction.on_relationship_changed(relationship_id);
        Ok(())
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    fn get_required(&self, id: &str) -> WeaveResult<Relationship> {
        self.relationships.get(id)?.ok_or_else(|| {
            StoreError::NotFound {
                kind: "relationship",
                id: id.to_string(),
            }
            .into()
        })
    }

    fn list_or_empty(&self) -> Vec<Relationship> {
        match self.relationships.list() {
            Ok(list) => list,
            Err(err) => {
                warn!(%err, "relationship list read failed, degrading to empty");
                Vec::new()
            }
        }
    }
}

/// Primary-only pattern with an all-interactions fallback when the primary
/// sample is too thin.
fn learn_pattern(history: &[Interaction], now: DateTime<Utc>) -> Pattern {
    let primary = PatternAnalyzer::analyze(history, Scope::PrimaryOnly, now);
    if primary.sample_size >= MIN_PATTERN_SAMPLE {
        primary
    } else {
        PatternAnalyzer::analyze(history, Scope::All, now)
    }
}

/// Field changes needed to bring a record's tier-fit bookkeeping in line
/// with a fresh analysis.
fn tier_fit_changes(
    relationship: &Relationship,
    analysis: &TierFitAnalysis,
    now: DateTime<Utc>,
) -> Vec<FieldChange> {
    let new_score = (analysis.category != FitCategory::InsufficientData)
        .then_some(analysis.fit_score);
    let new_suggested = analysis.suggested_tier;

    let mut changes = Vec::new();
    if relationship.tier_fit_score != new_score {
        changes.push(FieldChange::TierFitScore {
            from: relationship.tier_fit_score,
            to: new_score,
        });
    }
    if relationship.suggested_tier != new_suggested {
        changes.push(FieldChange::SuggestedTier {
            from: relationship.suggested_tier,
            to: new_suggested,
        });
        changes.push(FieldChange::TierFitSince {
            from: relationship.tier_fit_since,
            to: new_suggested.map(|_| now),
        });
    }
    changes
}
