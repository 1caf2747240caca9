//! Error types for OpsConsole

use thiserror::Error;

/// Main error type for OpsConsole state operations
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The user-fetch collaborator failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A single icon could not be resolved
    #[error("Icon load failed for {id}: {reason}")]
    IconLoad { id: String, reason: String },

    /// A single font could not be loaded
    #[error("Font load failed for {family}: {reason}")]
    FontLoad { family: String, reason: String },

    /// A locale fragment could not be parsed
    #[error("Locale fragment {fragment} is invalid: {reason}")]
    Locale { fragment: String, reason: String },

    /// Locale code is not one of the supported locales
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsoleError::IconLoad {
            id: "logos:ubuntu".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(format!("{}", err), "Icon load failed for logos:ubuntu: not found");

        let err = ConsoleError::UnsupportedLocale("fr_FR".to_string());
        assert_eq!(format!("{}", err), "Unsupported locale: fr_FR");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConsoleError = io_err.into();
        assert!(matches!(err, ConsoleError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConsoleError = json_err.into();
        assert!(matches!(err, ConsoleError::Serialization(_)));
    }
}
