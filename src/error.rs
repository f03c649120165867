//! Custom error types for GrowBank
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for GrowBank operations
#[derive(Error, Debug)]
pub enum GrowBankError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A flow operation was invoked from a state that does not allow it
    #[error("Flow error: {0}")]
    Flow(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl GrowBankError {
    /// Create a "not found" error for savings pots
    pub fn savings_pot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Savings pot",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for child accounts
    pub fn child_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Child account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for GrowBankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GrowBankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for GrowBank operations
pub type GrowBankResult<T> = Result<T, GrowBankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GrowBankError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = GrowBankError::savings_pot_not_found("pot9");
        assert_eq!(err.to_string(), "Savings pot not found: pot9");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_flow_error() {
        let err = GrowBankError::Flow("cannot submit from step 2 of 4".into());
        assert_eq!(err.to_string(), "Flow error: cannot submit from step 2 of 4");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GrowBankError = io_err.into();
        assert!(matches!(err, GrowBankError::Io(_)));
    }
}
