//! # weave-runtime
//!
//! The reactive shell around the pure analyzers: the host's persistence
//! layer pushes [`ChangeEvent`](weave_core::models::ChangeEvent)s into a
//! channel, a debouncer coalesces bursts, and the [`WeaveEngine`] facade
//! recomputes the dependent analyses. Expensive aggregates run on a
//! low-priority periodic schedule instead of on every change.

pub mod debounce;
pub mod engine;
pub mod scheduler;
pub mod tracing_setup;

pub use debounce::{Debouncer, ReadySet};
pub use engine::{RelationshipInsights, WeaveEngine};
pub use scheduler::AggregateSchedule;
