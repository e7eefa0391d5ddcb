//! Fundamental types for the airdrop gate.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identities, provider signals, verdicts, eligibility policy,
//! and the identity validation errors.

pub mod error;
pub mod identity;
pub mod policy;
pub mod signal;
pub mod verdict;

pub use error::IdentityError;
pub use identity::{Identity, SocialHandle, WalletAddress};
pub use policy::{EligibilityPolicy, VerificationPredicate};
pub use signal::{OnchainSignal, ReputationSignal};
pub use verdict::{GateSignals, Verdict};
