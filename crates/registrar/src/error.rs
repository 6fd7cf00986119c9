//! Error types for registrar.
//!
//! This module defines all error types used throughout the registrar crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for registrar operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// Failed to open or read the records file.
    #[error("failed to open input file {path}: {source}")]
    InputOpen {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The records file is malformed.
    #[error("malformed input at line {line}: {message}")]
    Parse {
        /// 1-based line number where parsing stopped.
        line: usize,
        /// Description of what was expected.
        message: String,
    },

    // === Lookup Errors ===
    /// No student matches the given key.
    #[error("no student named '{key}'")]
    StudentNotFound {
        /// The name that was looked up.
        key: String,
    },

    /// No course matches the given key.
    #[error("no course with code '{key}'")]
    CourseNotFound {
        /// The code that was looked up.
        key: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for registrar operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a parse error for the given line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a student-not-found error.
    #[must_use]
    pub fn student_not_found(key: impl Into<String>) -> Self {
        Self::StudentNotFound { key: key.into() }
    }

    /// Create a course-not-found error.
    #[must_use]
    pub fn course_not_found(key: impl Into<String>) -> Self {
        Self::CourseNotFound { key: key.into() }
    }

    /// Check if this error is a failed lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound { .. } | Self::CourseNotFound { .. }
        )
    }

    /// Check if this error came from malformed input.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
