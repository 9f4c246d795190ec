//! # weave-pattern
//!
//! Pattern analysis: derives a relationship's behavioral rhythm (average
//! contact interval, consistency, preferred categories and weekday) from
//! its completed interaction history.
//!
//! Patterns are never persisted as ground truth — they are recomputed on
//! demand from the trailing analysis window and are idempotent over an
//! unchanged history.

pub mod analyzer;
pub mod stats;

pub use analyzer::{PatternAnalyzer, Scope};
