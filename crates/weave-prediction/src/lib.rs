//! # weave-prediction
//!
//! Forecasting: when will a relationship cross its personalized attention
//! threshold, how healthy is it across six weighted signals, and where is
//! the whole network heading over a horizon.
//!
//! ## Signals
//!
//! | Signal | Source | Weight |
//! |--------|--------|--------|
//! | Decay | current health score | 30% |
//! | Pattern | consistency + interval alignment | 25% |
//! | Reciprocity | initiation balance | 15% |
//! | Battery | user's social battery vs. tier demand | 10% |
//! | Momentum | short-term trend, rescaled | 10% |
//! | Quality | recent vibe ratings | 10% |

pub mod composite;
pub mod engine;
pub mod forecast;
pub mod network;
pub mod signals;
pub mod threshold;

pub use composite::composite_health;
pub use engine::PredictionEngine;
pub use signals::SignalInputs;
