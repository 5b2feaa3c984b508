use async_trait::async_trait;

use super::Result;

/// Trait for the blob store backing the cache files.
///
/// Implementations hold whole blobs addressed by name. `put` replaces any
/// previous contents under the same name.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Returns true if a blob with this name exists.
    async fn has(&self, name: &str) -> Result<bool>;

    /// Reads the blob with this name.
    async fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Writes a blob under this name, replacing any previous contents.
    async fn put(&self, name: &str, contents: &[u8]) -> Result<()>;
}
