//! The gated claim flow: evaluate, check status, submit.

use crate::error::ClaimError;
use crate::gateway::{ClaimGateway, ClaimReceipt};

use airgate_evaluator::{EligibilityEngine, EvaluateError};
use airgate_providers::{OnchainSource, ReputationSource};
use airgate_types::{Identity, SocialHandle, WalletAddress};

/// Drives a claim from identity to submitted transaction.
///
/// Eligibility is re-evaluated on every claim attempt rather than trusting
/// any verdict the caller previously saw; the signals may have changed.
#[derive(Clone)]
pub struct ClaimFlow<O, R, G> {
    engine: EligibilityEngine<O, R>,
    gateway: G,
}

impl<O, R, G> ClaimFlow<O, R, G>
where
    O: OnchainSource,
    R: ReputationSource,
    G: ClaimGateway,
{
    pub fn new(engine: EligibilityEngine<O, R>, gateway: G) -> Self {
        Self { engine, gateway }
    }

    /// Attempt a claim for `identity`.
    ///
    /// Order of failure: validation, then eligibility, then already-claimed,
    /// then submission. The gateway is never touched for an identity that
    /// fails validation or the eligibility check.
    pub async fn claim(&self, identity: &Identity) -> Result<ClaimReceipt, ClaimError> {
        let address = WalletAddress::parse(&identity.address).map_err(EvaluateError::from)?;
        let handle = SocialHandle::parse(&identity.handle).map_err(EvaluateError::from)?;

        let verdict = self.engine.evaluate(identity).await?;
        if !verdict.eligible {
            tracing::info!(address = %address, reason = %verdict.reason, "claim refused");
            return Err(ClaimError::NotEligible(verdict.reason));
        }

        if self.gateway.has_claimed(&address).await? {
            tracing::info!(address = %address, "claim refused: already claimed");
            return Err(ClaimError::AlreadyClaimed(address));
        }

        let receipt = self.gateway.submit_claim(&address, &handle).await?;
        tracing::info!(
            address = %address,
            handle = %handle,
            transaction_hash = %receipt.transaction_hash,
            "claim submitted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airgate_nullables::{NullClaimGateway, NullOnchainSource, NullReputationSource};
    use airgate_types::{OnchainSignal, ReputationSignal};

    const ADDR: &str = "0x00192fb10df37c9fb26829eb2cc623cd1bf599e8";

    fn eligible_engine() -> EligibilityEngine<NullOnchainSource, NullReputationSource> {
        EligibilityEngine::new(
            NullOnchainSource::returning(OnchainSignal {
                verified: true,
                ens_name: None,
                transaction_count: 3,
                nft_count: 0,
            }),
            NullReputationSource::returning(ReputationSignal {
                all_time: 9.5,
                last_24h: 0.5,
                last_7d: 2.0,
                last_30d: 6.0,
            }),
        )
    }

    fn ineligible_engine() -> EligibilityEngine<NullOnchainSource, NullReputationSource> {
        EligibilityEngine::new(
            NullOnchainSource::returning(OnchainSignal {
                verified: false,
                ens_name: None,
                transaction_count: 0,
                nft_count: 0,
            }),
            NullReputationSource::returning(ReputationSignal::zero()),
        )
    }

    #[tokio::test]
    async fn eligible_identity_claims_successfully() {
        let flow = ClaimFlow::new(eligible_engine(), NullClaimGateway::new());
        let receipt = flow.claim(&Identity::new(ADDR, "somebody")).await.unwrap();
        assert_eq!(receipt.address.as_str(), ADDR);
        assert_eq!(receipt.handle.as_str(), "somebody");
        assert!(!receipt.transaction_hash.is_empty());
        assert_eq!(flow.gateway.submissions(), vec![(
            ADDR.to_string(),
            "somebody".to_string()
        )]);
    }

    #[tokio::test]
    async fn ineligible_identity_never_reaches_the_gateway() {
        let flow = ClaimFlow::new(ineligible_engine(), NullClaimGateway::new());
        let err = flow.claim(&Identity::new(ADDR, "somebody")).await.unwrap_err();
        match err {
            ClaimError::NotEligible(reason) => {
                assert!(reason.contains("wallet not verified"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(flow.gateway.status_check_count(), 0);
        assert_eq!(flow.gateway.submission_count(), 0);
    }

    #[tokio::test]
    async fn already_claimed_is_distinct_and_final() {
        let gateway = NullClaimGateway::new();
        gateway.mark_claimed(ADDR);
        let flow = ClaimFlow::new(eligible_engine(), gateway);

        let err = flow.claim(&Identity::new(ADDR, "somebody")).await.unwrap_err();
        assert!(matches!(err, ClaimError::AlreadyClaimed(_)));
        assert!(!err.is_retryable());
        assert_eq!(flow.gateway.submission_count(), 0);
    }

    #[tokio::test]
    async fn invalid_identity_fails_validation() {
        let flow = ClaimFlow::new(eligible_engine(), NullClaimGateway::new());
        let err = flow.claim(&Identity::new("", "somebody")).await.unwrap_err();
        assert!(matches!(
            err,
            ClaimError::Evaluation(EvaluateError::Validation(_))
        ));
        assert!(!err.is_retryable());
        assert_eq!(flow.gateway.status_check_count(), 0);
    }

    #[tokio::test]
    async fn gateway_failure_is_retryable() {
        let flow = ClaimFlow::new(eligible_engine(), NullClaimGateway::failing("relayer down"));
        let err = flow.claim(&Identity::new(ADDR, "somebody")).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("relayer down"));
    }

    #[tokio::test]
    async fn evaluation_failure_propagates() {
        let engine = EligibilityEngine::new(
            NullOnchainSource::failing("indexer down"),
            NullReputationSource::returning(ReputationSignal::zero()),
        );
        let flow = ClaimFlow::new(engine, NullClaimGateway::new());
        let err = flow.claim(&Identity::new(ADDR, "somebody")).await.unwrap_err();
        assert!(matches!(
            err,
            ClaimError::Evaluation(EvaluateError::SignalUnavailable { .. })
        ));
        assert!(err.is_retryable());
    }
}
