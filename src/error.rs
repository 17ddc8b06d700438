//! Error types for the crate.

use thiserror::Error;

use crate::message::MessageId;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A message with this id is already part of the transcript.
    #[error("Duplicate message id: {0}")]
    DuplicateMessageId(MessageId),

    /// Reading a transcript file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be assembled.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
