//! The six composite-health signals, each normalized to [0, 100].
//! Unknown inputs land on the neutral 50 rather than skewing the blend.

pub mod battery_signal;
pub mod momentum_signal;
pub mod pattern_signal;
pub mod quality_signal;
pub mod reciprocity_signal;

use weave_core::models::{Interaction, Pattern, Relationship, UserPreferences};

/// The neutral value a signal reports when it has nothing to go on.
pub const NEUTRAL: f64 = 50.0;

/// Everything the composite computation needs, passed in explicitly.
pub struct SignalInputs<'a> {
    pub relationship: &'a Relationship,
    pub pattern: Option<&'a Pattern>,
    pub preferences: &'a UserPreferences,
    /// Completed interactions, newest first, feeding the quality signal.
    pub recent_interactions: &'a [Interaction],
}

/// The decay signal is the current health score itself.
pub fn decay_signal(relationship: &Relationship) -> f64 {
    relationship.health_score.value()
}
