use serde::{Deserialize, Serialize};

use super::defaults;

/// Fixed weights for the six composite-health signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub decay: f64,
    pub pattern: f64,
    pub reciprocity: f64,
    pub battery: f64,
    pub momentum: f64,
    pub quality: f64,
}

impl CompositeWeights {
    pub fn total(&self) -> f64 {
        self.decay + self.pattern + self.reciprocity + self.battery + self.momentum + self.quality
    }
}

impl Default for CompositeWeights {
    fn default() -> Self {
        let [decay, pattern, reciprocity, battery, momentum, quality] =
            defaults::COMPOSITE_WEIGHTS;
        Self {
            decay,
            pattern,
            reciprocity,
            battery,
            momentum,
            quality,
        }
    }
}
