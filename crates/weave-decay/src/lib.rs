//! # weave-decay
//!
//! The decay/score model: each relationship's health score decays
//! continuously at
//!
//! ```text
//! dailyRate = tierBaseRate × toleranceMultiplier / resilience
//! ```
//!
//! where the multiplier is 0.5 inside the tolerance window since the last
//! interaction and 1.5 once past it. The relationship's stored score is
//! authoritative; this crate supplies the rate, projections, and a
//! per-factor breakdown — it never re-derives scores from raw history.

pub mod engine;
pub mod rate;

pub use engine::{DecayBreakdown, DecayEngine};
