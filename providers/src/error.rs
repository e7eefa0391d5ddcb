//! Provider error types.

use thiserror::Error;

/// Errors from the external collaborators.
///
/// All variants are retryable from the caller's point of view: re-invoking
/// the evaluation repeats the lookup.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request to provider failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from provider: {0}")]
    InvalidResponse(String),

    #[error("provider endpoint unreachable: {0}")]
    Unreachable(String),
}

impl ProviderError {
    /// Classify a reqwest transport error the same way for both clients.
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Unreachable(format!("request timed out: {e}"))
        } else if e.is_connect() {
            ProviderError::Unreachable(format!("connection failed: {e}"))
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }
}
