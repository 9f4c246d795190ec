//! # weave-reciprocity
//!
//! Reciprocity analysis: who initiates contact, how lopsided it has
//! become, and how that should weigh on a relationship's health.
//!
//! Counter updates are pure — they take an immutable relationship
//! snapshot and return a new snapshot plus the field-level changes for
//! the persistence layer to apply.

pub mod balance;
pub mod tracker;

pub use balance::{BalanceBand, ImbalanceDirection, ReciprocityAssessment};
pub use tracker::{record_initiation, remove_initiation};
