use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::interaction::InteractionCategory;
use crate::constants::DEFAULT_INTERVAL_DAYS;

/// Day of week, TS-exportable mirror of `chrono::Weekday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Learned behavioral rhythm of a relationship.
///
/// Always derivable from interaction history — never persisted as ground
/// truth. Recomputed on demand from the trailing analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pattern {
    /// Mean gap between consecutive interactions, in days.
    pub average_interval_days: f64,
    /// Inverted, clamped coefficient of variation: 1.0 is perfectly regular.
    pub consistency: f64,
    /// Up to 2 most frequent categories.
    pub preferred_categories: Vec<InteractionCategory>,
    /// Reported only when one weekday carries ≥30% of interactions.
    pub preferred_day: Option<DayOfWeek>,
    /// Number of qualifying interactions the pattern was learned from.
    pub sample_size: usize,
    pub computed_at: DateTime<Utc>,
}

impl Pattern {
    /// The fixed fallback when history is too thin to learn from:
    /// 14-day interval, zero consistency, no preferences.
    pub fn default_at(sample_size: usize, now: DateTime<Utc>) -> Self {
        Self {
            average_interval_days: DEFAULT_INTERVAL_DAYS,
            consistency: 0.0,
            preferred_categories: Vec::new(),
            preferred_day: None,
            sample_size,
            computed_at: now,
        }
    }

    /// A pattern is only trusted once there is enough regular history.
    pub fn is_reliable(&self) -> bool {
        self.sample_size >= crate::constants::MIN_PATTERN_SAMPLE && self.consistency > 0.2
    }
}
