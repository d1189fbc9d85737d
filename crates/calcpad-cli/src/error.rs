//! Error types for the CLI

use calcpad::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A key sequence contained a character that is not calculator input
    #[error("Invalid key '{key}' at position {position}")]
    InvalidKey {
        /// The offending character
        key: char,
        /// Zero-based character position in the sequence
        position: usize,
    },

    /// Terminal setup or teardown failed
    #[error("Terminal error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },

    /// Logging could not be initialized
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Calculator library error
    #[error("Calculator error: {0}")]
    Calc(#[from] CalcError),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid key error
    #[must_use]
    pub const fn invalid_key(key: char, position: usize) -> Self {
        Self::InvalidKey { key, position }
    }

    /// Create a terminal error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
