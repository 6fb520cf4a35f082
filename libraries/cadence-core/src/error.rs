/// Core error types for Cadence
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cadence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input that does not match a recognized value
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl CoreError {
    /// Create a malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create the error for an unrecognized enumerated value
    pub fn unknown_variant(kind: &str, value: &str) -> Self {
        Self::MalformedInput(format!("unrecognized {kind}: {value:?}"))
    }
}
