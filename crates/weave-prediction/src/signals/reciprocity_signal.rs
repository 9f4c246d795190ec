use weave_core::models::Relationship;
use weave_reciprocity::balance;

/// Reciprocity signal: the linear balance score scaled to [0, 100].
/// A perfectly mutual relationship reads 100; a fully one-sided one, 0.
pub fn calculate(relationship: &Relationship) -> f64 {
    let assessment = balance::assess(&relationship.initiation);
    (assessment.balance_score * 100.0).clamp(0.0, 100.0)
}
