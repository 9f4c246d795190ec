use weave_core::config::PredictionConfig;
use weave_core::models::{Relationship, UserPreferences};

use super::NEUTRAL;

/// Battery/energy-alignment signal: how well the user's current social
/// battery matches the tier's social demand. Unknown battery is neutral.
pub fn calculate(
    relationship: &Relationship,
    preferences: &UserPreferences,
    config: &PredictionConfig,
) -> f64 {
    let Some(battery) = preferences.battery_level else {
        return NEUTRAL;
    };
    let demand = config.battery_demands.get(relationship.tier);
    (100.0 - (f64::from(battery.min(100)) - demand).abs()).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use weave_core::models::{HealthScore, InitiationStats, Tier};

    fn relationship(tier: Tier) -> Relationship {
        Relationship {
            id: "r-1".into(),
            display_name: "Test".into(),
            tier,
            health_score: HealthScore::new(80.0),
            resilience: 1.0,
            momentum_score: 0.0,
            created_at: Utc::now(),
            last_interaction_at: None,
            tolerance_window_days: 14.0,
            rated_interaction_count: 0,
            initiation: InitiationStats::default(),
            tier_fit_score: None,
            suggested_tier: None,
            tier_fit_since: None,
            last_suggestion_dismissed_at: None,
        }
    }

    #[test]
    fn unknown_battery_is_neutral() {
        let prefs = UserPreferences::default();
        assert_eq!(
            calculate(&relationship(Tier::InnerCircle), &prefs, &PredictionConfig::default()),
            NEUTRAL
        );
    }

    #[test]
    fn battery_matching_tier_demand_scores_full() {
        let prefs = UserPreferences {
            battery_level: Some(70),
            ..Default::default()
        };
        assert_eq!(
            calculate(&relationship(Tier::InnerCircle), &prefs, &PredictionConfig::default()),
            100.0
        );
    }

    #[test]
    fn depleted_battery_drags_high_demand_tiers() {
        let prefs = UserPreferences {
            battery_level: Some(10),
            ..Default::default()
        };
        let inner = calculate(
            &relationship(Tier::InnerCircle),
            &prefs,
            &PredictionConfig::default(),
        );
        let community = calculate(
            &relationship(Tier::Community),
            &prefs,
            &PredictionConfig::default(),
        );
        assert!(community > inner);
    }
}
