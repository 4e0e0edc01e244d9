//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Invalid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Failed to read or write the history store.
    #[error("History store I/O failed: {0}")]
    HistoryIo(#[from] std::io::Error),

    /// Failed to serialize the history payload.
    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
