//! Error types for Lumen.

use thiserror::Error;

/// The error type for all fallible Lumen operations.
///
/// Every failure inside the engine is an input-validation failure, so none of
/// these are transient and none are retried internally.
#[derive(Error, Debug)]
pub enum LumenError {
    /// A document could not be indexed (empty identifier, malformed mapping reference, ...).
    #[error("Index error: {0}")]
    Index(String),

    /// A query string was empty or could not be parsed.
    #[error("Query error: {0}")]
    Query(String),

    /// A requested document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A mapping configuration could not be interpreted.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Lumen operations.
pub type Result<T> = std::result::Result<T, LumenError>;

impl LumenError {
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LumenError::Index(msg.into())
    }

    pub fn query<S: Into<String>>(msg: S) -> Self {
        LumenError::Query(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LumenError::NotFound(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LumenError::InvalidConfig(msg.into())
    }

    /// Returns true if this error reports a missing document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LumenError::NotFound(_))
    }

    /// Returns true if this error reports an invalid query.
    pub fn is_query(&self) -> bool {
        matches!(self, LumenError::Query(_))
    }

    /// Returns true if this error reports a rejected document.
    pub fn is_index(&self) -> bool {
        matches!(self, LumenError::Index(_))
    }
}
