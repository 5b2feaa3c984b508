use thiserror::Error;

/// Errors that can occur when calling the upstream API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Transport failed: {0}")]
    Transport(String),
    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
