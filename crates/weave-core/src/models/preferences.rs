use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::DEFAULT_MAX_DAILY_SUGGESTIONS;

/// The user's current social season, set in the host app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Actively widening the circle; suggestions lean generous.
    Expansion,
    /// Holding steady.
    Maintenance,
    /// Winding down; low-stakes suggestions are suppressed.
    Rest,
}

/// Per-user preferences the engine reads at call time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct UserPreferences {
    pub season: Option<Season>,
    /// Current social battery, 0–100, if the host tracks it.
    pub battery_level: Option<u8>,
    pub max_daily_suggestions: usize,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            season: None,
            battery_level: None,
            max_daily_suggestions: DEFAULT_MAX_DAILY_SUGGESTIONS,
        }
    }
}
