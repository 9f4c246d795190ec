use weave_core::constants::{MIN_RECIPROCITY_SAMPLE, SEVERE_STREAK};
use weave_core::models::{InitiationRatio, InitiationStats};

/// How balanced the initiation pattern is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceBand {
    /// Fewer than 5 total initiations — nothing to judge.
    InsufficientData,
    /// 40–60% user share.
    Balanced,
    /// 30–40% or 60–70%.
    SlightlyImbalanced,
    /// 20–30% or 70–80%.
    VeryImbalanced,
    /// Outside 20–80%.
    OneSided,
}

/// Which side carries the imbalance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImbalanceDirection {
    UserHeavy,
    FriendHeavy,
}

/// Full reciprocity classification for one relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct ReciprocityAssessment {
    pub ratio: InitiationRatio,
    pub band: BalanceBand,
    pub direction: Option<ImbalanceDirection>,
    /// One-sided with a ≥5 consecutive same-direction streak.
    pub severe: bool,
    pub warning: Option<String>,
    /// 1.0 at perfect balance, linearly down to 0 at the extremes.
    pub balance_score: f64,
    /// Total initiations the assessment rests on.
    pub sample_size: f64,
}

/// Classify the initiation balance of one relationship.
pub fn assess(stats: &InitiationStats) -> ReciprocityAssessment {
    let ratio = stats.computed_ratio();
    let total = stats.total();
    let r = ratio.value();

    if total < MIN_RECIPROCITY_SAMPLE {
        return ReciprocityAssessment {
            ratio,
            band: BalanceBand::InsufficientData,
            direction: None,
            severe: false,
            warning: None,
            balance_score: ratio.balance_score(),
            sample_size: total,
        };
    }

    let band = if (0.4..=0.6).contains(&r) {
        BalanceBand::Balanced
    } else if (0.3..=0.7).contains(&r) {
        BalanceBand::SlightlyImbalanced
    } else if (0.2..=0.8).contains(&r) {
        BalanceBand::VeryImbalanced
    } else {
        BalanceBand::OneSided
    };

    let direction = match band {
        BalanceBand::Balanced | BalanceBand::InsufficientData => None,
        _ if r > 0.5 => Some(ImbalanceDirection::UserHeavy),
        _ => Some(ImbalanceDirection::FriendHeavy),
    };

    // Severity needs a run, not just a ratio: one bad month shouldn't read
    // as a one-sided friendship. Only the user-side streak is tracked.
    let severe = band == BalanceBand::OneSided
        && direction == Some(ImbalanceDirection::UserHeavy)
        && stats.consecutive_user_streak >= SEVERE_STREAK;

    let warning = warning_for(band, direction, stats.consecutive_user_streak);

    ReciprocityAssessment {
        ratio,
        band,
        direction,
        severe,
        warning,
        balance_score: ratio.balance_score(),
        sample_size: total,
    }
}

fn warning_for(
    band: BalanceBand,
    direction: Option<ImbalanceDirection>,
    streak: u32,
) -> Option<String> {
    match (band, direction) {
        (BalanceBand::VeryImbalanced, Some(ImbalanceDirection::UserHeavy)) => Some(
            "You're doing most of the reaching out here — worth noticing".to_string(),
        ),
        (BalanceBand::VeryImbalanced, Some(ImbalanceDirection::FriendHeavy)) => Some(
            "They've been doing most of the reaching out lately".to_string(),
        ),
        (BalanceBand::OneSided, Some(ImbalanceDirection::UserHeavy)) => {
            if streak >= SEVERE_STREAK {
                Some(format!(
                    "You've initiated the last {streak} times — this connection may be one-sided"
                ))
            } else {
                Some("Nearly all the initiative is coming from you".to_string())
            }
        }
        (BalanceBand::OneSided, Some(ImbalanceDirection::FriendHeavy)) => {
            Some("They're carrying this connection — consider reaching out".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(user: f64, friend: f64, streak: u32) -> InitiationStats {
        InitiationStats {
            user_initiations: user,
            friend_initiations: friend,
            consecutive_user_streak: streak,
            ratio: InitiationRatio::default(),
        }
    }

    #[test]
    fn even_split_is_balanced() {
        let a = assess(&stats(5.0, 5.0, 0));
        assert_eq!(a.band, BalanceBand::Balanced);
        assert!(a.direction.is_none());
        assert!(a.warning.is_none());
    }

    #[test]
    fn bands_step_with_distance_from_center() {
        assert_eq!(assess(&stats(6.5, 3.5, 0)).band, BalanceBand::SlightlyImbalanced);
        assert_eq!(assess(&stats(7.5, 2.5, 0)).band, BalanceBand::VeryImbalanced);
        assert_eq!(assess(&stats(9.0, 1.0, 0)).band, BalanceBand::OneSided);
    }

    #[test]
    fn below_sample_floor_nothing_is_judged() {
        let a = assess(&stats(3.0, 0.0, 3));
        assert_eq!(a.band, BalanceBand::InsufficientData);
        assert!(!a.severe);
        assert!(a.warning.is_none());
    }

    #[test]
    fn severe_needs_the_streak() {
        let without_streak = assess(&stats(10.0, 0.0, 2));
        assert_eq!(without_streak.band, BalanceBand::OneSided);
        assert!(!without_streak.severe);

        let with_streak = assess(&stats(10.0, 0.0, 6));
        assert!(with_streak.severe);
        assert!(with_streak.warning.unwrap().contains("6 times"));
    }
}
