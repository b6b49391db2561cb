//! Error types for comicinfo
//!
//! This module defines all error types used throughout the library.
//! Every validator fails with one of these kinds on the first violation.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using comicinfo Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for comicinfo operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input is not well-formed XML, has the wrong root, or is not
    /// recognizable as either XML or a path
    #[error("parse error: {0}")]
    Parse(String),

    /// File does not exist or cannot be read
    #[error("file error: {}: {reason}", path.display())]
    File {
        /// Path that failed to load
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A structurally required field or attribute is missing
    #[error("schema error: {0}")]
    Schema(String),

    /// Value outside a closed enumeration
    #[error("invalid value '{value}' for {field}; expected one of: {}", ValidValues(valid_values))]
    InvalidEnum {
        /// Schema name of the field
        field: String,
        /// Offending value
        value: String,
        /// Every value the field accepts, in schema order
        valid_values: Vec<String>,
    },

    /// Numeric value outside its inclusive range
    #[error("{field} must be between {min} and {max}, got {value}")]
    Range {
        /// Schema name of the field
        field: String,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Raw text that cannot be converted to the field's type
    #[error("cannot convert '{value}' to {expected} for {field}")]
    TypeCoercion {
        /// Schema name of the field
        field: String,
        /// Offending raw text
        value: String,
        /// Target kind, e.g. "Integer"
        expected: &'static str,
    },
}

impl Error {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }

    /// Create a file error for `path`
    pub fn file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::File {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid enum error from a static value table
    pub fn invalid_enum<'a>(
        field: impl Into<String>,
        value: impl Into<String>,
        valid_values: impl IntoIterator<Item = &'a &'static str>,
    ) -> Self {
        Error::InvalidEnum {
            field: field.into(),
            value: value.into(),
            valid_values: valid_values.into_iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Create a range error
    pub fn range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Error::Range {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a type coercion error
    pub fn type_coercion(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Error::TypeCoercion {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// Schema name of the field this error is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::InvalidEnum { field, .. }
            | Error::Range { field, .. }
            | Error::TypeCoercion { field, .. } => Some(field),
            _ => None,
        }
    }
}

struct ValidValues<'a>(&'a [String]);

impl fmt::Display for ValidValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
