//! Engine configuration. Every tunable the components consume lives here —
//! tier tables, decay multipliers, blending weights, cooldowns — so hosts
//! can adjust them without touching engine code.

mod composite_config;
mod decay_config;
pub mod defaults;
mod drift_config;
mod prediction_config;
mod suggestion_config;
mod tier_config;

pub use composite_config::CompositeWeights;
pub use decay_config::DecayConfig;
pub use drift_config::DriftConfig;
pub use prediction_config::PredictionConfig;
pub use suggestion_config::SuggestionConfig;
pub use tier_config::TierConfig;

use serde::{Deserialize, Serialize};

use crate::models::Tier;

/// A value table keyed by tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerTier<T> {
    pub community: T,
    pub close_friends: T,
    pub inner_circle: T,
}

impl<T: Copy> PerTier<T> {
    pub fn get(&self, tier: Tier) -> T {
        match tier {
            Tier::Community => self.community,
            Tier::CloseFriends => self.close_friends,
            Tier::InnerCircle => self.inner_circle,
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tiers: TierConfig,
    pub decay: DecayConfig,
    pub drift: DriftConfig,
    pub prediction: PredictionConfig,
    pub suggestions: SuggestionConfig,
    pub composite: CompositeWeights,
}
