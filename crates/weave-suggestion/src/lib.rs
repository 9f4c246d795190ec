//! # weave-suggestion
//!
//! The suggestion generator: evaluates six independent triggers per
//! relationship, merges everything network-wide, ranks by urgency bucket
//! then days-until, and respects per-(relationship, kind) dismissal
//! cooldowns. All state — relationships, patterns, predictions,
//! dismissals, preferences — is passed in explicitly, so generation is
//! deterministic and unit-testable.

pub mod cooldown;
pub mod engine;
pub mod triggers;

pub use engine::{SuggestionContext, SuggestionEngine};
