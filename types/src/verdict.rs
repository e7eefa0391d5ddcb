//! The eligibility verdict.

use crate::signal::{OnchainSignal, ReputationSignal};
use serde::{Deserialize, Serialize};

/// The raw signals a verdict was derived from, returned alongside it so
/// callers can show the user why they passed or failed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GateSignals {
    pub onchain: OnchainSignal,
    pub reputation: ReputationSignal,
}

/// The eligibility decision for one identity.
///
/// A verdict is fully determined by its signals and the policy at decision
/// time. It is derived on every request and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the identity may claim the airdrop.
    pub eligible: bool,
    /// Human-readable explanation of the decision.
    pub reason: String,
    /// The signals the decision was computed from.
    pub signals: GateSignals,
}
