//! In-memory blob store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventdeck_core::cache::{FileStore, Result, StoreError};

/// In-memory blob store for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Contents are not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn has(&self, name: &str) -> Result<bool> {
        Ok(self.blobs.read().await.contains_key(name))
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let blobs = self.blobs.read().await;
        blobs
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn put(&self, name: &str, contents: &[u8]) -> Result<()> {
        self.blobs
            .write()
            .await
            .insert(name.to_string(), contents.to_vec());
        Ok(())
    }
}
