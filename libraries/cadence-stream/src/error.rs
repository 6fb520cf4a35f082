//! Error types for stream details

use cadence_core::CoreError;
use thiserror::Error;

/// Result type for stream details operations
pub type Result<T> = std::result::Result<T, StreamError>;

/// Errors that can occur while reading stream details or their settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Missing mandatory field, wrong shape or unrecognized enumerated value
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Settings could not be loaded or are invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StreamError {
    /// Create a malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}

impl From<CoreError> for StreamError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MalformedInput(msg) => Self::MalformedInput(msg),
        }
    }
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

impl From<config::ConfigError> for StreamError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
