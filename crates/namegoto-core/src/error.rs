//! Search error types

use thiserror::Error;

/// Errors that can end a search before it completes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The cancellation signal was observed; results already emitted stand
    #[error("search cancelled")]
    Cancelled,

    /// The caller broke a configuration contract (e.g. empty pattern where listing is disallowed)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A collaborator failed while producing names or candidates
    #[error("name source error: {0}")]
    Source(String),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
