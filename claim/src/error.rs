//! Claim error types.

use airgate_evaluator::EvaluateError;
use airgate_types::WalletAddress;
use thiserror::Error;

/// Errors from the claim flow.
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The identity's verdict was not eligible. Carries the verdict's
    /// reason; not retryable until the upstream signals change.
    #[error("not eligible to claim: {0}")]
    NotEligible(String),

    /// The address has already claimed. Distinct and non-retryable.
    #[error("airdrop already claimed by {0}")]
    AlreadyClaimed(WalletAddress),

    /// The eligibility check itself failed.
    #[error(transparent)]
    Evaluation(#[from] EvaluateError),

    /// The claim endpoint rejected or failed the submission.
    #[error("claim submission failed: {0}")]
    SubmissionFailed(String),

    /// The claim endpoint could not be reached.
    #[error("claim endpoint unreachable: {0}")]
    Unreachable(String),

    /// The claim endpoint answered with a malformed payload.
    #[error("invalid response from claim endpoint: {0}")]
    InvalidResponse(String),
}

impl ClaimError {
    /// Whether re-invoking the claim with the same identity can succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClaimError::NotEligible(_) | ClaimError::AlreadyClaimed(_) => false,
            ClaimError::Evaluation(e) => e.is_retryable(),
            ClaimError::SubmissionFailed(_)
            | ClaimError::Unreachable(_)
            | ClaimError::InvalidResponse(_) => true,
        }
    }
}
