//! Error types and utilities for ytrans

use thiserror::Error;

/// Result type alias for ytrans operations
pub type Result<T> = std::result::Result<T, YtransError>;

/// Errors raised by the shared bootstrap code.
///
/// Library crates keep their own precise error enums; the binary reports
/// all of them through `anyhow`.
#[derive(Error, Debug)]
pub enum YtransError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// Logging bootstrap errors
    #[error("Logging error: {message}")]
    Logging {
        /// Human readable description
        message: String,
    },
}

impl YtransError {
    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }
}
