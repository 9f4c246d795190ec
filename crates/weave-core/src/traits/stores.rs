use crate::errors::WeaveResult;
use crate::models::{FieldChange, Interaction, Relationship, RelationshipId};

/// Read/write access to relationship records, implemented by the host's
/// persistence layer.
pub trait IRelationshipStore: Send + Sync {
    fn get(&self, id: &str) -> WeaveResult<Option<Relationship>>;
    fn list(&self) -> WeaveResult<Vec<Relationship>>;

    /// Apply a field-change list to one record. Must be transactional at
    /// the single-record level: either every change lands or none do.
    fn apply(&self, id: &str, changes: &[FieldChange]) -> WeaveResult<()>;
}

/// Typed traversal of the relationship ↔ interaction join, implemented
/// once and reused by every component.
pub trait IInteractionStore: Send + Sync {
    fn interactions_for_relationship(&self, id: &str) -> WeaveResult<Vec<Interaction>>;
    fn participants_for_interaction(&self, id: &str) -> WeaveResult<Vec<RelationshipId>>;
}
