use tracing::debug;
use weave_core::models::{FieldChange, Initiator, Relationship};

/// Record one initiation against a relationship snapshot.
///
/// Returns the new snapshot and the field-level changes for the store to
/// apply transactionally. A `Mutual` initiation credits 0.5 to each side
/// and resets the user streak.
pub fn record_initiation(
    relationship: &Relationship,
    initiator: Initiator,
) -> (Relationship, Vec<FieldChange>) {
    let mut next = relationship.clone();

    match initiator {
        Initiator::User => {
            next.initiation.user_initiations = relationship.initiation.user() + 1.0;
            next.initiation.consecutive_user_streak =
                relationship.initiation.consecutive_user_streak.saturating_add(1);
        }
        Initiator::Friend => {
            next.initiation.friend_initiations = relationship.initiation.friend() + 1.0;
            next.initiation.consecutive_user_streak = 0;
        }
        Initiator::Mutual => {
            next.initiation.user_initiations = relationship.initiation.user() + 0.5;
            next.initiation.friend_initiations = relationship.initiation.friend() + 0.5;
            next.initiation.consecutive_user_streak = 0;
        }
    }
    next.initiation.ratio = next.initiation.computed_ratio();

    let changes = diff(relationship, &next);
    debug!(
        relationship = %relationship.id,
        ?initiator,
        ratio = %next.initiation.ratio,
        "initiation recorded"
    );
    (next, changes)
}

/// Reverse one initiation's contribution, e.g. when its interaction is
/// deleted. Counters floor at zero. A broken streak cannot be
/// reconstructed, so only a user-side removal decrements it.
pub fn remove_initiation(
    relationship: &Relationship,
    initiator: Initiator,
) -> (Relationship, Vec<FieldChange>) {
    let mut next = relationship.clone();

    match initiator {
        Initiator::User => {
            next.initiation.user_initiations = (relationship.initiation.user() - 1.0).max(0.0);
            next.initiation.consecutive_user_streak =
                relationship.initiation.consecutive_user_streak.saturating_sub(1);
        }
        Initiator::Friend => {
            next.initiation.friend_initiations =
                (relationship.initiation.friend() - 1.0).max(0.0);
        }
        Initiator::Mutual => {
            next.initiation.user_initiations = (relationship.initiation.user() - 0.5).max(0.0);
            next.initiation.friend_initiations =
                (relationship.initiation.friend() - 0.5).max(0.0);
        }
    }
    next.initiation.ratio = next.initiation.computed_ratio();

    let changes = diff(relationship, &next);
    (next, changes)
}

/// Field-level diff of the initiation bookkeeping between two snapshots.
fn diff(old: &Relationship, new: &Relationship) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if old.initiation.user_initiations != new.initiation.user_initiations {
        changes.push(FieldChange::UserInitiations {
            from: old.initiation.user_initiations,
            to: new.initiation.user_initiations,
        });
    }
    if old.initiation.friend_initiations != new.initiation.friend_initiations {
        changes.push(FieldChange::FriendInitiations {
            from: old.initiation.friend_initiations,
            to: new.initiation.friend_initiations,
        });
    }
    if old.initiation.consecutive_user_streak != new.initiation.consecutive_user_streak {
        changes.push(FieldChange::ConsecutiveUserStreak {
            from: old.initiation.consecutive_user_streak,
            to: new.initiation.consecutive_user_streak,
        });
    }
    if old.initiation.ratio != new.initiation.ratio {
        changes.push(FieldChange::InitiationRatio {
            from: old.initiation.ratio.value(),
            to: new.initiation.ratio.value(),
        });
    }

    changes
}
