//! Error types for docnav
//!
//! Uses `thiserror` for library errors; the binary wraps with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docnav operations
pub type DocResult<T> = Result<T, DocError>;

/// Main error type for docnav operations
#[derive(Error, Debug)]
pub enum DocError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON
    #[error("invalid JSON in {file}: {source}")]
    InvalidDocument {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config file failed to parse
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
