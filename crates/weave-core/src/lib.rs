//! # weave-core
//!
//! Foundation crate for the Weave relationship engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{StoreError, WeaveError, WeaveResult};
pub use models::{
    HealthScore, InitiationRatio, Interaction, Pattern, Relationship, RelationshipId, Tier,
};
