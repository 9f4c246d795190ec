use serde::{Deserialize, Serialize};

use super::relationship::RelationshipId;

/// A data-change notification emitted by the persistence collaborator.
///
/// The engine never observes storage directly; the host pushes these into
/// the runtime's change feed, which debounces and triggers recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    RelationshipChanged {
        id: RelationshipId,
    },
    InteractionLogged {
        id: String,
        participants: Vec<RelationshipId>,
    },
    InteractionDeleted {
        id: String,
        participants: Vec<RelationshipId>,
    },
    PreferencesChanged,
}

impl ChangeEvent {
    /// Relationship ids whose derived analyses this event invalidates.
    pub fn affected_relationships(&self) -> &[RelationshipId] {
        match self {
            ChangeEvent::RelationshipChanged { id } => std::slice::from_ref(id),
            ChangeEvent::InteractionLogged { participants, .. } => participants,
            ChangeEvent::InteractionDeleted { participants, .. } => participants,
            ChangeEvent::PreferencesChanged => &[],
        }
    }
}
