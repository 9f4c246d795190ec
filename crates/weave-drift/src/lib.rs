//! # weave-drift
//!
//! Drift detection: flags relationships whose health scores fell to or
//! below their tier's warning threshold, ranked by tier-weighted urgency
//! and capped so the consumer is never flooded.

pub mod detector;

pub use detector::DriftDetector;
