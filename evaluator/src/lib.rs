//! Eligibility engine for the airdrop gate.
//!
//! The engine is the one piece of business logic in the workspace: it
//! validates an identity, fetches the two collaborator signals
//! concurrently, and folds them into a pass/fail verdict with a
//! human-readable reason. It holds no state beyond its sources and policy,
//! so re-evaluating the same identity can only change the verdict when the
//! upstream signals change.

pub mod engine;
pub mod error;

pub use engine::{
    decide, EligibilityEngine, CLAUSE_SCORE_TOO_LOW, CLAUSE_WALLET_NOT_VERIFIED, REASON_ELIGIBLE,
};
pub use error::EvaluateError;
