//! Identity validation errors.

use thiserror::Error;

/// Errors raised while validating the (address, handle) pair.
///
/// These are caller-input errors: not retryable, the caller must correct
/// the submitted identity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("wallet address is required")]
    MissingAddress,

    #[error("social handle is required")]
    MissingHandle,

    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),
}
