use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Who initiated an interaction.
/// `Mutual` credits 0.5 of an initiation to each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Initiator {
    User,
    Friend,
    Mutual,
}

/// Share of initiations made by the user, clamped to [0.0, 1.0].
/// A non-finite ratio (e.g. 0/0) constructs the neutral 0.5.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InitiationRatio(f64);

impl InitiationRatio {
    pub const NEUTRAL: f64 = 0.5;

    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(Self::NEUTRAL)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Balance score: 1.0 at a perfect 50/50 split, decreasing linearly
    /// with distance from 0.5, floored at 0.
    pub fn balance_score(self) -> f64 {
        (1.0 - 2.0 * (self.0 - Self::NEUTRAL).abs()).max(0.0)
    }
}

impl Default for InitiationRatio {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for InitiationRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for InitiationRatio {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Per-relationship initiation bookkeeping.
///
/// Counters are `f64` because a mutual initiation credits 0.5 to each side.
/// Corrupt (negative) counters are clamped to zero on read via the accessor
/// methods; raw fields are kept for round-tripping what the store holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InitiationStats {
    pub user_initiations: f64,
    pub friend_initiations: f64,
    /// Consecutive user-side initiations with no friend initiation between.
    pub consecutive_user_streak: u32,
    pub ratio: InitiationRatio,
}

impl InitiationStats {
    /// User-side count, clamped to zero.
    pub fn user(&self) -> f64 {
        if self.user_initiations.is_finite() {
            self.user_initiations.max(0.0)
        } else {
            0.0
        }
    }

    /// Friend-side count, clamped to zero.
    pub fn friend(&self) -> f64 {
        if self.friend_initiations.is_finite() {
            self.friend_initiations.max(0.0)
        } else {
            0.0
        }
    }

    pub fn total(&self) -> f64 {
        self.user() + self.friend()
    }

    /// Recompute the ratio from the clamped counters.
    pub fn computed_ratio(&self) -> InitiationRatio {
        InitiationRatio::new(self.user() / self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_clamps_and_neutralizes() {
        assert_eq!(InitiationRatio::new(1.7).value(), 1.0);
        assert_eq!(InitiationRatio::new(-0.2).value(), 0.0);
        assert_eq!(InitiationRatio::new(f64::NAN).value(), 0.5);
    }

    #[test]
    fn balance_score_is_linear_from_center() {
        assert_eq!(InitiationRatio::new(0.5).balance_score(), 1.0);
        assert!((InitiationRatio::new(0.75).balance_score() - 0.5).abs() < 1e-9);
        assert_eq!(InitiationRatio::new(1.0).balance_score(), 0.0);
    }

    #[test]
    fn negative_counters_clamp_on_read() {
        let stats = InitiationStats {
            user_initiations: -3.0,
            friend_initiations: 4.0,
            ..Default::default()
        };
        assert_eq!(stats.user(), 0.0);
        assert_eq!(stats.total(), 4.0);
        assert_eq!(stats.computed_ratio().value(), 0.0);
    }

    #[test]
    fn zero_total_yields_neutral_ratio() {
        let stats = InitiationStats::default();
        assert_eq!(stats.computed_ratio().value(), 0.5);
    }
}
