//! The eligibility decision procedure.

use crate::error::EvaluateError;
use airgate_providers::{OnchainSource, ReputationSource};
use airgate_types::{
    EligibilityPolicy, GateSignals, Identity, OnchainSignal, ReputationSignal, SocialHandle,
    Verdict, WalletAddress,
};

/// Reason returned with every eligible verdict.
pub const REASON_ELIGIBLE: &str = "Congrats! Eligible for the airdrop.";

/// Prefix for every not-eligible reason, followed by the applicable clauses.
pub const REASON_NOT_ELIGIBLE_PREFIX: &str = "Not eligible: ";

/// Clause appended when the wallet fails on-chain verification.
pub const CLAUSE_WALLET_NOT_VERIFIED: &str = "wallet not verified";

/// Clause appended when the all-time score does not clear the threshold.
pub const CLAUSE_SCORE_TOO_LOW: &str = "score too low";

/// Stateless evaluator combining the two collaborator signals into a
/// [`Verdict`] under an [`EligibilityPolicy`].
#[derive(Clone)]
pub struct EligibilityEngine<O, R> {
    onchain: O,
    reputation: R,
    policy: EligibilityPolicy,
}

impl<O, R> EligibilityEngine<O, R>
where
    O: OnchainSource,
    R: ReputationSource,
{
    /// Create an engine with the default policy.
    pub fn new(onchain: O, reputation: R) -> Self {
        Self::with_policy(onchain, reputation, EligibilityPolicy::default())
    }

    /// Create an engine with an explicit policy.
    pub fn with_policy(onchain: O, reputation: R, policy: EligibilityPolicy) -> Self {
        Self {
            onchain,
            reputation,
            policy,
        }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Evaluate an identity.
    ///
    /// Validation happens before any network access. The two lookups are
    /// issued concurrently and the verdict is not produced until both
    /// resolve; if either fails, the whole evaluation fails and no partial
    /// verdict is returned.
    pub async fn evaluate(&self, identity: &Identity) -> Result<Verdict, EvaluateError> {
        let address = WalletAddress::parse(&identity.address)?;
        let handle = SocialHandle::parse(&identity.handle)?;

        let (onchain, reputation) = tokio::join!(
            self.onchain.lookup_onchain(&address),
            self.reputation.lookup_reputation(&handle),
        );
        let onchain = onchain.map_err(|e| EvaluateError::signal_unavailable("onchain", e))?;
        let reputation =
            reputation.map_err(|e| EvaluateError::signal_unavailable("reputation", e))?;

        let verdict = decide(&self.policy, onchain, reputation);
        tracing::info!(
            address = %address,
            handle = %handle,
            eligible = verdict.eligible,
            all_time_score = verdict.signals.reputation.all_time,
            wallet_verified = verdict.signals.onchain.verified,
            "eligibility evaluated"
        );
        Ok(verdict)
    }
}

/// The pure decision: `eligible = verified AND all_time > min_score`.
///
/// Extracted from the engine so the rule can be tested without sources.
pub fn decide(
    policy: &EligibilityPolicy,
    onchain: OnchainSignal,
    reputation: ReputationSignal,
) -> Verdict {
    let wallet_ok = onchain.verified;
    let score_ok = reputation.all_time > policy.min_score;
    let eligible = wallet_ok && score_ok;

    let reason = if eligible {
        REASON_ELIGIBLE.to_string()
    } else {
        let mut clauses = Vec::with_capacity(2);
        if !wallet_ok {
            clauses.push(CLAUSE_WALLET_NOT_VERIFIED);
        }
        if !score_ok {
            clauses.push(CLAUSE_SCORE_TOO_LOW);
        }
        format!("{REASON_NOT_ELIGIBLE_PREFIX}{}", clauses.join(", "))
    };

    Verdict {
        eligible,
        reason,
        signals: GateSignals {
            onchain,
            reputation,
        },
    }
}
