use crate::errors::WeaveResult;
use crate::models::SuggestionEvent;

/// Sink for suggestion lifecycle events (shown / acted / dismissed).
pub trait ISuggestionLog: Send + Sync {
    fn record(&self, event: &SuggestionEvent) -> WeaveResult<()>;
}
