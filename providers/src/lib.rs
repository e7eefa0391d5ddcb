//! External collaborator clients for the airdrop gate.
//!
//! The gate consumes two signals it does not compute itself:
//! - an on-chain activity summary for a wallet address, served by a
//!   blockchain-data indexer (`GET /v1/ens/{address}`,
//!   `GET /v1/accounts/{address}/tx-count`,
//!   `GET /v1/accounts/{address}/nft-count`)
//! - a social-engagement score for a handle, served by a reputation API
//!   (`GET /v1/score?handle={handle}`)
//!
//! Each capability is a trait so the evaluator can be exercised against
//! deterministic doubles; the HTTP clients here are the production
//! implementations. Timeouts live in the clients, not in the evaluator.

pub mod error;
pub mod onchain;
pub mod reputation;

pub use error::ProviderError;
pub use onchain::OnchainClient;
pub use reputation::ReputationClient;

use airgate_types::{OnchainSignal, ReputationSignal, SocialHandle, WalletAddress};
use std::future::Future;

/// Capability: look up the on-chain activity summary for an address.
pub trait OnchainSource: Send + Sync {
    fn lookup_onchain(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<OnchainSignal, ProviderError>> + Send;
}

/// Capability: look up the social-engagement score summary for a handle.
///
/// Implementations normalize "unknown handle" to [`ReputationSignal::zero`]
/// rather than failing; only transport and malformed-payload problems are
/// errors.
pub trait ReputationSource: Send + Sync {
    fn lookup_reputation(
        &self,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ReputationSignal, ProviderError>> + Send;
}

impl<T: OnchainSource> OnchainSource for std::sync::Arc<T> {
    fn lookup_onchain(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<OnchainSignal, ProviderError>> + Send {
        self.as_ref().lookup_onchain(address)
    }
}

impl<T: ReputationSource> ReputationSource for std::sync::Arc<T> {
    fn lookup_reputation(
        &self,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ReputationSignal, ProviderError>> + Send {
        self.as_ref().lookup_reputation(handle)
    }
}
