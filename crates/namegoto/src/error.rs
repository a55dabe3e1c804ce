//! Error types for the namegoto command line.

use namegoto_core::SearchError;
use thiserror::Error;

/// Error type for catalog loading, configuration and search.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog parse error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Search failed or was cancelled
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Result type alias using the namegoto Error.
pub type Result<T> = std::result::Result<T, Error>;
