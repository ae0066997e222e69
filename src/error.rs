//! Error types for coverletter library.

use std::io;
use thiserror::Error;

/// Result type alias for coverletter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around letter structuring and delivery.
///
/// Structuring itself never fails; these variants cover the boundaries
/// (reading input, fetching generated text, serializing output).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The text source failed to produce a letter.
    #[error("Text source error: {0}")]
    Source(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A display label (organization or role) is unusable.
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
