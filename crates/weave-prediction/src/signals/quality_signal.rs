use weave_core::constants::RECENT_QUALITY_SAMPLE;
use weave_core::models::Interaction;

use super::NEUTRAL;

/// Recent-quality signal: mean vibe of the last few rated interactions,
/// mapped 1–5 → 0–100. No ratings reads as neutral.
pub fn calculate(recent: &[Interaction]) -> f64 {
    let ratings: Vec<f64> = recent
        .iter()
        .filter(|i| i.is_completed())
        .filter_map(|i| i.vibe)
        .take(RECENT_QUALITY_SAMPLE)
        .map(|v| f64::from(v.clamp(1, 5)))
        .collect();

    if ratings.is_empty() {
        return NEUTRAL;
    }

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    ((mean - 1.0) / 4.0 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use test_fixtures::InteractionBuilder;

    #[test]
    fn no_ratings_is_neutral() {
        let now = Utc::now();
        let history = vec![InteractionBuilder::new(now, 3, "r-1").build()];
        assert_eq!(calculate(&history), NEUTRAL);
    }

    #[test]
    fn top_ratings_score_full() {
        let now = Utc::now();
        let history = vec![
            InteractionBuilder::new(now, 3, "r-1").vibe(5).build(),
            InteractionBuilder::new(now, 10, "r-1").vibe(5).build(),
        ];
        assert_eq!(calculate(&history), 100.0);
    }

    #[test]
    fn mid_ratings_land_mid_scale() {
        let now = Utc::now();
        let history = vec![
            InteractionBuilder::new(now, 3, "r-1").vibe(3).build(),
            InteractionBuilder::new(now, 10, "r-1").vibe(3).build(),
        ];
        assert_eq!(calculate(&history), 50.0);
    }
}
