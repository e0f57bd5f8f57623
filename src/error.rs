//! Application-level error type.

use thiserror::Error;

use crate::journal::JournalError;

/// Errors surfaced to the user by the Reflexa binary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReflexaError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The journal or catalog could not be loaded.
    #[error(transparent)]
    Journal(#[from] JournalError),

    /// The terminal interface failed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from the TUI runtime.
        message: String,
    },

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
