//! Error types for the verse-of-the-day pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a run
///
/// Every variant is fatal for the run. Missing fonts are not represented
/// here: the renderer degrades to the built-in face instead of failing.
#[derive(Error, Debug)]
pub enum Error {
    /// A required setting or secret is missing or malformed
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The passage source could not be reached or answered with a failure
    #[error("Failed to fetch passage: {0}")]
    FetchError(String),

    /// A remote call did not complete in time
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// The background could not be decoded or the result could not be encoded
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// The messaging endpoint could not be reached or rejected the upload
    #[error("Failed to publish: {0}")]
    PublishError(String),

    /// Filesystem error (reading the background, writing the output image)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify a transport error from the passage source.
    pub(crate) fn fetch(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Error::Timeout(timeout_ms)
        } else {
            Error::FetchError(err.to_string())
        }
    }

    /// Classify a transport error from the messaging endpoint.
    pub(crate) fn publish(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Error::Timeout(timeout_ms)
        } else {
            Error::PublishError(err.to_string())
        }
    }
}
