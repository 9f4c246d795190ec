use weave_core::models::Relationship;

use super::NEUTRAL;

/// Momentum signal: the signed −30..+30 momentum rescaled to [0, 100].
/// Zero momentum lands exactly on neutral.
pub fn calculate(relationship: &Relationship) -> f64 {
    let momentum = relationship.momentum_score;
    if !momentum.is_finite() {
        return NEUTRAL;
    }
    ((momentum + 30.0) / 60.0 * 100.0).clamp(0.0, 100.0)
}
