mod stores;
mod suggestion_log;

pub use stores::{IInteractionStore, IRelationshipStore};
pub use suggestion_log::ISuggestionLog;
