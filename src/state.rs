//! Application state management
//!
//! Contains shared state accessible across all handlers: the storage backend
//! behind the `Storage` trait, and the chat completion client.

use crate::chat::ChatClient;
use crate::storage::Storage;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Record storage (in-memory or Postgres, selected at startup)
    pub storage: Arc<dyn Storage>,

    /// Chat completion client; degrades to a canned reply when unconfigured
    pub chat: ChatClient,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, chat: ChatClient) -> Self {
        Self { storage, chat }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
