/// Persistence-boundary errors surfaced by the host's store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("write failed for {kind} {id}: {reason}")]
    WriteFailed {
        kind: &'static str,
        id: String,
        reason: String,
    },

    #[error("change stream closed")]
    StreamClosed,
}
