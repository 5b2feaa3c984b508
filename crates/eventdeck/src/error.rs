//! Aggregator error types.

use thiserror::Error;

use eventdeck_core::api::ApiError;
use eventdeck_core::cache::{SerializationError, StoreError};

/// Result type alias for aggregator operations.
pub type Result<T> = std::result::Result<T, AggregatorError>;

/// Errors that can occur while aggregating events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregatorError {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Cache store failed: {0}")]
    Store(#[from] StoreError),

    #[error("Cache encoding failed: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Configuration error: {0}")]
    Config(String),
}
