//! Error types for the mixsight library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mixsight operations.
///
/// The analysis pipeline itself only ever produces [`MixsightError::InvalidInput`].
/// "No data", "no document" and "no strong association" are empty results,
/// not errors. The remaining variants come from loading configuration and
/// request files in the surrounding application.
#[derive(Debug, Error)]
pub enum MixsightError {
    /// A column or document profile is malformed.
    #[error("Invalid input for {subject}: {message}")]
    InvalidInput { subject: String, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MixsightError {
    /// Build an [`MixsightError::InvalidInput`] for the given subject.
    pub fn invalid(subject: impl Into<String>, message: impl Into<String>) -> Self {
        MixsightError::InvalidInput {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Returns true if the caller sent malformed input (a 400-equivalent).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MixsightError::InvalidInput { .. } | MixsightError::Json(_))
    }
}

/// Result type alias for mixsight operations.
pub type Result<T> = std::result::Result<T, MixsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = MixsightError::invalid("column 'age'", "null_count 5 exceeds count 3");
        assert_eq!(
            err.to_string(),
            "Invalid input for column 'age': null_count 5 exceeds count 3"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_config_is_not_invalid_input() {
        assert!(!MixsightError::Config("bad".to_string()).is_invalid_input());
    }
}
