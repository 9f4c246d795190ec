use weave_core::config::SuggestionConfig;
use weave_core::models::{
    DriftPrediction, ProactiveSuggestion, Relationship, SuggestionKind, SuggestionUrgency,
};

/// Fires when a drift forecast predicts an attention need within the
/// configured window and the urgency is meaningful.
pub fn evaluate(
    relationship: &Relationship,
    prediction: Option<&DriftPrediction>,
    config: &SuggestionConfig,
) -> Option<ProactiveSuggestion> {
    let prediction = prediction?;
    if prediction.days_until_attention > config.upcoming_drift_days
        || prediction.urgency == SuggestionUrgency::Low
    {
        return None;
    }

    let message = if prediction.days_until_attention == 0 {
        format!("{} needs attention now", relationship.display_name)
    } else {
        format!(
            "{} will need attention in about {} days",
            relationship.display_name, prediction.days_until_attention
        )
    };

    Some(ProactiveSuggestion {
        kind: SuggestionKind::UpcomingDrift,
        relationship_id: relationship.id.clone(),
        urgency: prediction.urgency,
        days_until: prediction.days_until_attention as f64,
        title: format!("Reconnect with {}", relationship.display_name),
        message,
        metadata: Some(serde_json::json!({
            "predicted_score": prediction.predicted_score,
            "threshold": prediction.threshold,
        })),
    })
}
