//! # weave-portfolio
//!
//! Portfolio analysis: tier-weighted network health, activity and
//! category distributions, relationship archetypes, and prioritized
//! imbalance diagnostics across the whole network.

pub mod imbalance;
pub mod snapshot;

pub use snapshot::PortfolioAnalyzer;
