//! Error types for the hub core
//!
//! Not-found lookups and empty filters are not errors; they come back as
//! `None` or an empty sequence.

use std::path::PathBuf;

use thiserror::Error;

/// A record or request was rejected before it touched any state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent or blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field held a value outside its domain
    #[error("invalid {field}: {value:?}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected input
        value: String,
    },
}

impl ValidationError {
    /// Build an [`ValidationError::InvalidValue`]
    #[must_use]
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

/// Failure of a persistent backing store
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a file failed
    #[error("io error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A stored record could not be decoded
    #[error("invalid record in {} (line {line}): {source}", path.display())]
    Parse {
        /// File involved
        path: PathBuf,
        /// 1-based line number, or 0 when the whole document failed
        line: usize,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be encoded for writing
    #[error("could not encode record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Any failure of an operation that validates and then persists
#[derive(Debug, Error)]
pub enum HubError {
    /// The input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}
