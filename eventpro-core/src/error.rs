//! Error types for EventPro.

use thiserror::Error;

/// Errors that can occur in EventPro operations.
#[derive(Error, Debug)]
pub enum EventProError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EventProError {
    fn from(e: serde_json::Error) -> Self {
        EventProError::Serialization(e.to_string())
    }
}

/// Result type alias for EventPro operations.
pub type EventProResult<T> = Result<T, EventProError>;
