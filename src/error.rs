//! Error types shared by the engine, the palette library and chart output

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LuxError>;

/// Errors returned by the public API.
#[derive(Debug, Error)]
pub enum LuxError {
    /// Input rejected at the API boundary (counts, hues, hex strings, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A saved palette id does not exist in the library.
    #[error("not found: {0}")]
    NotFound(String),
    /// Reading or writing the palette library failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The palette library or settings file is not valid JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// Chart rendering failed.
    #[error("failed to render chart: {0}")]
    Chart(String),
}

impl LuxError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LuxError::InvalidArgument(msg.into())
    }
}
