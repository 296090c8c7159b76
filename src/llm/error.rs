//! Provider error types.

use thiserror::Error;

/// Errors that can occur when calling a remote generation API.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed (network, TLS, or a malformed response body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },
}
