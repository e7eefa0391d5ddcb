//! Evaluation error types.

use airgate_providers::ProviderError;
use airgate_types::IdentityError;
use thiserror::Error;

/// Errors surfaced by [`EligibilityEngine::evaluate`](crate::EligibilityEngine::evaluate).
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The submitted identity is missing or malformed. Not retryable; the
    /// caller must correct the input.
    #[error("{0}")]
    Validation(#[from] IdentityError),

    /// A collaborator lookup failed, so no verdict could be produced.
    /// Retryable by re-invoking the evaluation.
    #[error("{provider} signal unavailable: {source}")]
    SignalUnavailable {
        provider: &'static str,
        source: ProviderError,
    },
}

impl EvaluateError {
    pub fn signal_unavailable(provider: &'static str, source: ProviderError) -> Self {
        Self::SignalUnavailable { provider, source }
    }

    /// Whether re-invoking the evaluation with the same identity can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SignalUnavailable { .. })
    }
}
