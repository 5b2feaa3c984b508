use thiserror::Error;

/// Errors that can occur during blob store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No such blob: {0}")]
    NotFound(String),
    #[error("Store I/O failed: {0}")]
    Io(String),
}

/// Result type for blob store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
