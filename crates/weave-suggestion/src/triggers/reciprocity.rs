use weave_core::config::SuggestionConfig;
use weave_core::constants::MIN_RECIPROCITY_SAMPLE;
use weave_core::models::{ProactiveSuggestion, Relationship, SuggestionKind, SuggestionUrgency};
use weave_reciprocity::balance::{self, BalanceBand};

/// Fires on a lopsided initiation ratio with enough history behind it.
/// Mild friend-heavy cases are deliberately left quiet — nagging someone
/// whose friends reach out a lot is noise.
pub fn evaluate(
    relationship: &Relationship,
    config: &SuggestionConfig,
) -> Option<ProactiveSuggestion> {
    let stats = &relationship.initiation;
    if stats.total() < MIN_RECIPROCITY_SAMPLE {
        return None;
    }

    let ratio = stats.computed_ratio().value();
    if ratio <= config.reciprocity_high && ratio >= config.reciprocity_low {
        return None;
    }

    let assessment = balance::assess(stats);
    let urgency = if assessment.severe {
        SuggestionUrgency::High
    } else if assessment.band == BalanceBand::OneSided {
        SuggestionUrgency::Medium
    } else {
        // Very-imbalanced-but-not-one-sided would surface as Low; suppress.
        return None;
    };

    let message = assessment
        .warning
        .unwrap_or_else(|| "The initiation balance has drifted".to_string());

    Some(ProactiveSuggestion {
        kind: SuggestionKind::ReciprocityImbalance,
        relationship_id: relationship.id.clone(),
        urgency,
        days_until: 0.0,
        title: format!("Rebalance things with {}", relationship.display_name),
        message,
        metadata: Some(serde_json::json!({ "ratio": ratio })),
    })
}
