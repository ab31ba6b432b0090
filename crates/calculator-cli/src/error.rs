//! Error types for the CLI

use keypad_calculator::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A key was refused in strict mode
    #[error("key '{key}' rejected: {source}")]
    KeyRejected {
        /// The raw key
        key: String,
        /// Why the engine refused it
        source: CalcError,
    },

    /// Calculator error outside key handling
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a rejected-key error
    #[must_use]
    pub fn key_rejected(key: impl Into<String>, source: CalcError) -> Self {
        Self::KeyRejected {
            key: key.into(),
            source,
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
