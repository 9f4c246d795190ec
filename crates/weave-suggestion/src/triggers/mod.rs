//! One module per trigger. Each evaluates independently and returns at
//! most one suggestion for a relationship.

pub mod best_day;
pub mod momentum;
pub mod optimal_timing;
pub mod pattern_break;
pub mod reciprocity;
pub mod upcoming_drift;
