//! Error handling module for PromptPath
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; the binary wraps them with anyhow context.

use thiserror::Error;

/// Main error type for PromptPath
#[derive(Error, Debug)]
pub enum SurveyError {
    /// IO errors (dataset files, export files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP errors (dataset fetch)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset errors (malformed records, unusable source)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Export errors (nothing to export, unwritable target)
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias for PromptPath operations
pub type Result<T> = std::result::Result<T, SurveyError>;

// Convenient error constructors
impl SurveyError {
    /// Create a dataset error
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Create an export error
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurveyError::dataset("all 3 entries are malformed");
        assert_eq!(err.to_string(), "Dataset error: all 3 entries are malformed");

        let err = SurveyError::export("no results computed yet");
        assert_eq!(err.to_string(), "Export error: no results computed yet");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SurveyError = io_err.into();
        assert!(matches!(err, SurveyError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SurveyError = json_err.into();
        assert!(matches!(err, SurveyError::Json(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = SurveyError::dataset("bad record");
        assert!(matches!(err, SurveyError::Dataset(_)));

        let err = SurveyError::export("missing directory");
        assert!(matches!(err, SurveyError::Export(_)));
    }
}
