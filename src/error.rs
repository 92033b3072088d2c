//! Error types for pathfield

use thiserror::Error;

/// Result type alias for pathfield operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pathfield
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Listing Errors
    // -------------------------------------------------------------------------
    #[error("Failed to list directory '{path}': {reason}")]
    Fetch { path: String, reason: String },

    #[error("Failed to parse directory listing: {0}")]
    Parse(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid cache strategy: {0}")]
    InvalidCacheStrategy(String),
}

impl Error {
    /// Build a fetch error for `path`
    pub fn fetch(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Fetch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from the listing provider
    #[must_use]
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::Parse(_))
    }
}
