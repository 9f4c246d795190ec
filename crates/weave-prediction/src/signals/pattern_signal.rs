use weave_core::models::Pattern;

use super::NEUTRAL;

/// Bonus when the learned interval aligns with the tier's expectation.
const ALIGNMENT_BONUS: f64 = 15.0;
/// Penalty once the interval drifts well past the expectation.
const DRIFT_PENALTY: f64 = 15.0;

/// Pattern signal: consistency scaled to [0, 100], with a bonus when the
/// actual/expected interval ratio sits in [0.8, 1.2] and a penalty above
/// 1.5. No learned pattern reads as neutral.
pub fn calculate(pattern: Option<&Pattern>, expected_interval_days: f64) -> f64 {
    let Some(pattern) = pattern else {
        return NEUTRAL;
    };
    if pattern.sample_size < weave_core::constants::MIN_PATTERN_SAMPLE {
        return NEUTRAL;
    }

    let mut score = pattern.consistency * 100.0;

    if expected_interval_days > 0.0 {
        let ratio = pattern.average_interval_days / expected_interval_days;
        if (0.8..=1.2).contains(&ratio) {
            score += ALIGNMENT_BONUS;
        } else if ratio > 1.5 {
            score -= DRIFT_PENALTY;
        }
    }

    score.clamp(0.0, 100.0)
}
