use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::debug;

use weave_core::config::SuggestionConfig;
use weave_core::models::{
    DayOfWeek, DismissalMap, DriftPrediction, Pattern, ProactiveSuggestion, Relationship,
    RelationshipId, Season, SuggestionKind, SuggestionUrgency, UserPreferences,
};

use crate::cooldown;
use crate::triggers;

/// Everything a generation run needs, passed in explicitly — no ambient
/// state, so runs are deterministic.
pub struct SuggestionContext<'a> {
    pub relationships: &'a [Relationship],
    pub patterns: &'a HashMap<RelationshipId, Pattern>,
    pub predictions: &'a HashMap<RelationshipId, DriftPrediction>,
    pub preferences: &'a UserPreferences,
    pub dismissals: &'a DismissalMap,
    /// Network-wide best scheduling day, if the aggregate produced one.
    pub best_day: Option<DayOfWeek>,
    pub now: DateTime<Utc>,
}

/// Evaluates all triggers across all relationships and assembles the
/// final ranked list.
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    pub fn new(config: SuggestionConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, ctx: &SuggestionContext<'_>) -> Vec<ProactiveSuggestion> {
        let mut all: Vec<ProactiveSuggestion> = Vec::new();

        for relationship in ctx.relationships {
            let pattern = ctx.patterns.get(&relationship.id);
            let prediction = ctx.predictions.get(&relationship.id);

            all.extend(triggers::upcoming_drift::evaluate(
                relationship,
                prediction,
                &self.config,
            ));
            all.extend(triggers::optimal_timing::evaluate(
                relationship,
                pattern,
                &self.config,
                ctx.now,
            ));
            all.extend(triggers::pattern_break::evaluate(
                relationship,
                pattern,
                &self.config,
                ctx.now,
            ));
            all.extend(triggers::momentum::evaluate(
                relationship,
                &self.config,
                ctx.now,
            ));
            all.extend(triggers::reciprocity::evaluate(relationship, &self.config));
            all.extend(triggers::best_day::evaluate(
                relationship,
                ctx.best_day,
                &self.config,
                ctx.now,
            ));
        }

        // During a Rest season only what genuinely matters gets through.
        if ctx.preferences.season == Some(Season::Rest) {
            all.retain(|s| s.urgency != SuggestionUrgency::Low);
        }

        // Dismissal cooldowns.
        all.retain(|s| {
            !cooldown::is_suppressed(
                ctx.dismissals,
                &s.relationship_id,
                s.kind,
                self.config.cooldown_days,
                ctx.now,
            )
        });

        // One suggestion per (relationship, kind).
        let mut seen: HashSet<(RelationshipId, SuggestionKind)> = HashSet::new();
        all.retain(|s| seen.insert((s.relationship_id.clone(), s.kind)));

        // Urgency bucket first, then soonest.
        all.sort_by(|a, b| {
            a.urgency
                .rank()
                .cmp(&b.urgency.rank())
                .then(a.days_until.partial_cmp(&b.days_until).unwrap_or(Ordering::Equal))
        });

        if all.len() > ctx.preferences.max_daily_suggestions {
            debug!(
                total = all.len(),
                cap = ctx.preferences.max_daily_suggestions,
                "suggestions capped"
            );
            all.truncate(ctx.preferences.max_daily_suggestions);
        }

        all
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(SuggestionConfig::default())
    }
}
