//! Disk-backed blob store implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use eventdeck_core::cache::{FileStore, Result, StoreError};

/// Blob store that persists cache files under a directory.
///
/// `put` writes to a temporary sibling file and renames it into place, so a
/// concurrent reader never observes a partially written cache file.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created on first write if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[async_trait]
impl FileStore for DiskStore {
    async fn has(&self, name: &str) -> Result<bool> {
        tokio::fs::try_exists(self.path_for(name))
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        match tokio::fs::read(self.path_for(name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }

    async fn put(&self, name: &str, contents: &[u8]) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let tmp = self.path_for(&format!("{}.tmp", name));
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, self.path_for(name))
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}
