mod store_error;

pub use store_error::StoreError;

/// Convenience alias used across the workspace.
pub type WeaveResult<T> = Result<T, WeaveError>;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum WeaveError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
