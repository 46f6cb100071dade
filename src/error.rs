//! Error types for the Priznak library.
//!
//! All errors are represented by the [`PriznakError`] enum. The only
//! failure the classification core itself can produce is a pattern that
//! does not compile; everything else comes from the surrounding I/O and
//! serialization layers.

use std::io;

use thiserror::Error;

/// The main error type for Priznak operations.
#[derive(Error, Debug)]
pub enum PriznakError {
    /// I/O errors (reading input files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A rule pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PriznakError.
pub type Result<T> = std::result::Result<T, PriznakError>;

impl PriznakError {
    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        PriznakError::Pattern(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PriznakError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PriznakError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
