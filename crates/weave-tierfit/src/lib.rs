//! # weave-tierfit
//!
//! Tier fit analysis: does a relationship's actual contact rhythm match
//! the cadence its assigned tier expects? Mismatches propose a one-step
//! tier move, never skipping tiers and never leaving the tier range.

pub mod classify;
pub mod engine;

pub use classify::Classification;
pub use engine::TierFitEngine;
