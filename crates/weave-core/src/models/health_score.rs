use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Relationship health score clamped to [0.0, 100.0].
/// Decays continuously between interactions and is restored by contact.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthScore(f64);

impl HealthScore {
    /// Scores at or above this are thriving.
    pub const THRIVING: f64 = 70.0;
    pub const MAX: f64 = 100.0;

    /// Create a new HealthScore, clamping to [0.0, 100.0].
    /// Non-finite input collapses to 0.0; prefer [`HealthScore::updated`]
    /// when a previous value exists.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, Self::MAX))
        } else {
            Self(0.0)
        }
    }

    /// Replace the score with `value`, keeping the current score when the
    /// computation produced a non-finite number.
    pub fn updated(self, value: f64) -> Self {
        if value.is_finite() {
            Self::new(value)
        } else {
            self
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_thriving(self) -> bool {
        self.0 >= Self::THRIVING
    }
}

impl Default for HealthScore {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for HealthScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<HealthScore> for f64 {
    fn from(s: HealthScore) -> Self {
        s.0
    }
}
