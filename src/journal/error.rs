//! Error types exposed by the journal layer.

use thiserror::Error;

/// Errors surfaced while building catalogs or loading journal files.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JournalError {
    /// Two catalog entries share the same identifier.
    #[error("emotion catalog contains duplicate id: {id}")]
    DuplicateEmotion {
        /// The repeated identifier.
        id: String,
    },

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// A journal file was read but its contents were malformed.
    #[error("parse error: {message}")]
    Parse {
        /// Details about the malformed content.
        message: String,
    },
}
