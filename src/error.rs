//! Error types for pageflow
//!
//! Fetcher implementations return `Result<T, Error>`; the controller itself
//! never surfaces an `Error` to callers; fetch failures are folded into the
//! pagination state instead.

use thiserror::Error;

/// The main error type for pageflow
#[derive(Error, Debug)]
pub enum Error {
    /// The fetcher rejected a page request
    #[error("fetch failed for page {page}: {message}")]
    Fetch { page: u32, message: String },

    /// Any other failure raised by a fetcher implementation
    #[error("{0}")]
    Other(String),

    /// Wrapper for arbitrary errors bubbled out of a fetcher with `?`
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a fetch error
    pub fn fetch(page: u32, message: impl Into<String>) -> Self {
        Self::Fetch {
            page,
            message: message.into(),
        }
    }

    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for pageflow
pub type Result<T> = std::result::Result<T, Error>;
