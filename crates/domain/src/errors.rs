//! Error types used throughout the metrics pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for metric recording
///
/// Every public recording entry point reports failures through this type.
/// Only `Config` and `BatchWrite` are normally observed by callers; the other
/// variants are produced by adapters and folded into `BatchWrite` by the
/// writer before they reach the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RecordingError {
    /// No active run or recorder, or unusable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record's value is neither a number nor a list of numbers.
    ///
    /// Only raised when strict value checking is enabled; the default policy
    /// skips the record with a warning instead.
    #[error("Unsupported value shape: {0}")]
    UnsupportedValueShape(String),

    /// The whole batch failed to reach the log sink.
    #[error("Failed to write metrics batch: {0}")]
    BatchWrite(String),

    #[error("Sink error: {0}")]
    Sink(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecordingError {
    /// Stable label for the error kind, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::UnsupportedValueShape(_) => "unsupported_value_shape",
            Self::BatchWrite(_) => "batch_write",
            Self::Sink(_) => "sink",
            Self::Auth(_) => "auth",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for metric recording operations
pub type Result<T> = std::result::Result<T, RecordingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_write_message() {
        let err = RecordingError::BatchWrite("sink unavailable".into());
        assert_eq!(err.to_string(), "Failed to write metrics batch: sink unavailable");
        assert_eq!(err.kind(), "batch_write");
    }

    #[test]
    fn test_serialized_shape() {
        let err = RecordingError::Config("no active run".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Config", "message": "no active run"}));

        let back: RecordingError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
