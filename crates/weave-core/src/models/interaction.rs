use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::initiation::Initiator;
use super::relationship::RelationshipId;
use crate::constants::PRIMARY_MAX_PARTICIPANTS;

/// Lifecycle state of a logged interaction ("weave").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InteractionStatus {
    Completed,
    Planned,
    PendingConfirm,
}

/// What kind of contact an interaction was.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InteractionCategory {
    Conversation,
    Meal,
    Activity,
    Call,
    Message,
    Celebration,
    Support,
    Other,
}

/// A logged or planned social contact event.
///
/// Completed interactions are immutable except for corrective edits;
/// deleting one must reverse its contribution to scores and initiation
/// counters (see `weave-reciprocity`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interaction {
    pub id: String,
    pub occurred_at: DateTime<Utc>,
    pub status: InteractionStatus,
    pub category: InteractionCategory,
    /// Participant relationship ids (the user is implicit).
    pub participants: Vec<RelationshipId>,
    pub initiated_by: Option<Initiator>,
    /// Optional 1–5 quality rating.
    pub vibe: Option<u8>,
}

impl Interaction {
    pub fn is_completed(&self) -> bool {
        self.status == InteractionStatus::Completed
    }

    /// Primary interactions are small enough to reflect the one-on-one
    /// rhythm of a relationship rather than a group event.
    pub fn is_primary(&self) -> bool {
        self.participants.len() <= PRIMARY_MAX_PARTICIPANTS
    }
}

/// Identity equality: two interactions are equal if they share an id.
impl PartialEq for Interaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
