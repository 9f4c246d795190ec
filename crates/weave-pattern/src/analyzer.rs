use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

use weave_core::constants::{MIN_PATTERN_SAMPLE, PATTERN_WINDOW_DAYS, PREFERRED_DAY_SHARE};
use weave_core::models::{DayOfWeek, Interaction, InteractionCategory, Pattern};

use crate::stats;

/// Which interactions feed the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every completed interaction in the window.
    All,
    /// Only primary interactions (≤3 participants). Group events follow
    /// the group's rhythm, not the relationship's.
    PrimaryOnly,
}

/// Derives a [`Pattern`] from raw interaction history.
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Learn a pattern from `history` as of `now`.
    ///
    /// Fewer than 2 qualifying interactions — or a history where every
    /// qualifying interaction fell on one calendar day — yields the fixed
    /// default pattern (14-day interval, zero consistency, no preferences).
    pub fn analyze(history: &[Interaction], scope: Scope, now: DateTime<Utc>) -> Pattern {
        let mut qualifying: Vec<&Interaction> = history
            .iter()
            .filter(|i| Self::qualifies(i, scope, now))
            .collect();
        // Newest first.
        qualifying.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

        let sample_size = qualifying.len();
        if sample_size < MIN_PATTERN_SAMPLE {
            return Pattern::default_at(sample_size, now);
        }

        let gaps = Self::day_gaps(&qualifying);
        if gaps.is_empty() {
            return Pattern::default_at(sample_size, now);
        }

        let mean = stats::mean(&gaps);
        // Inverted coefficient of variation, clamped: 1.0 is perfectly
        // regular, 0.0 is noise.
        let consistency = if mean > 0.0 {
            (1.0 - stats::std_dev(&gaps, mean) / mean).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Pattern {
            average_interval_days: mean,
            consistency,
            preferred_categories: Self::preferred_categories(&qualifying),
            preferred_day: Self::preferred_day(&qualifying),
            sample_size,
            computed_at: now,
        }
    }

    fn qualifies(interaction: &Interaction, scope: Scope, now: DateTime<Utc>) -> bool {
        if !interaction.is_completed() {
            return false;
        }
        let age_days = (now - interaction.occurred_at).num_days();
        if !(0..=PATTERN_WINDOW_DAYS).contains(&age_days) {
            return false;
        }
        match scope {
            Scope::All => true,
            Scope::PrimaryOnly => interaction.is_primary(),
        }
    }

    /// Calendar-day gaps between consecutive interactions, newest first.
    /// Zero-length gaps (same-day duplicates) are excluded.
    fn day_gaps(sorted_desc: &[&Interaction]) -> Vec<f64> {
        sorted_desc
            .windows(2)
            .map(|w| (w[0].occurred_at.date_naive() - w[1].occurred_at.date_naive()).num_days())
            .filter(|&d| d > 0)
            .map(|d| d as f64)
            .collect()
    }

    /// Top 2 categories by frequency; ties break on category order so the
    /// result is stable across runs.
    fn preferred_categories(qualifying: &[&Interaction]) -> Vec<InteractionCategory> {
        let mut counts: HashMap<InteractionCategory, usize> = HashMap::new();
        for i in qualifying {
            *counts.entry(i.category).or_default() += 1;
        }
        let mut ranked: Vec<(InteractionCategory, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.into_iter().take(2).map(|(c, _)| c).collect()
    }

    /// The preferred weekday, reported only when one day carries at least
    /// 30% of interactions.
    fn preferred_day(qualifying: &[&Interaction]) -> Option<DayOfWeek> {
        const DAYS: [DayOfWeek; 7] = [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ];

        if qualifying.is_empty() {
            return None;
        }
        let mut counts = [0usize; 7];
        for i in qualifying {
            counts[i.occurred_at.weekday().num_days_from_monday() as usize] += 1;
        }
        let (best_idx, best) = counts
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.cmp(&b.1))?;
        if best as f64 / qualifying.len() as f64 >= PREFERRED_DAY_SHARE {
            Some(DAYS[best_idx])
        } else {
            None
        }
    }
}
