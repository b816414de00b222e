use std::sync::Arc;

use service::{storage::memory_store::MemoryTopicStore, wlog::repository::TopicStore};

/// Shared handler state. Cloning is cheap; every clone sees the same store.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn TopicStore>,
}

impl ServerState {
    pub fn new(store: Arc<dyn TopicStore>) -> Self {
        Self { store }
    }

    /// Fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryTopicStore::new())
    }
}
