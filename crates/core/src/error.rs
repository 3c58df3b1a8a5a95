//! Error types for Folio
//!
//! This module provides the shared error taxonomy with two concerns:
//! - **Severity**: whether a failure degrades a feature or is fatal to the
//!   current operation
//! - **Wrapping**: downstream crates wrap `AppError` via `#[from]` where
//!   they need to bubble shared failures

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Error can be automatically recovered from
    Recoverable,
    /// Feature degraded but the app can continue
    Degraded,
    /// Critical error requiring user action
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Degraded => write!(f, "Degraded"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

/// Main error type for Folio
#[derive(Error, Debug)]
pub enum AppError {
    /// File could not be found on disk
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File content is not valid UTF-8 text
    #[error("File is not valid text: {path}")]
    NotText { path: PathBuf },

    /// A supplied value failed validation
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Configuration problem surfaced from the config layer
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Returns the severity classification for this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileNotFound { .. } => ErrorSeverity::Degraded,
            Self::NotText { .. } => ErrorSeverity::Degraded,
            Self::InvalidValue { .. } => ErrorSeverity::Recoverable,
            Self::Config(_) => ErrorSeverity::Recoverable,
            Self::Io(_) => ErrorSeverity::Fatal,
        }
    }

    /// Returns true if the app can keep going after this error
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Fatal
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Recoverable < ErrorSeverity::Degraded);
        assert!(ErrorSeverity::Degraded < ErrorSeverity::Fatal);
    }

    #[test]
    fn test_file_not_found_is_degraded() {
        let err = AppError::FileNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Degraded);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_error_is_fatal() {
        let err = AppError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidValue {
            field: "speech.rate".to_string(),
            message: "must be between 0.5 and 3.0".to_string(),
        };
        assert!(err.to_string().contains("speech.rate"));
    }
}
