//! Provider signals — the two external inputs to the eligibility decision.

use serde::{Deserialize, Serialize};

/// Blockchain-derived activity summary for an address.
///
/// Produced by the on-chain data provider and treated as opaque: the gate
/// trusts `verified` as computed from the provider's raw fields via the
/// configured [`VerificationPredicate`](crate::policy::VerificationPredicate).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnchainSignal {
    /// Whether the address shows enough on-chain activity to count as real.
    pub verified: bool,
    /// Reverse-resolved ENS name, if the address has one.
    pub ens_name: Option<String>,
    /// Lifetime outgoing transaction count.
    pub transaction_count: u64,
    /// Number of NFTs currently held.
    pub nft_count: u64,
}

/// Social-engagement score summary for a handle, over four windows.
///
/// Unknown handles are represented as an all-zero signal, never as an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReputationSignal {
    /// Aggregate score since account creation.
    pub all_time: f64,
    /// Score over the trailing 24 hours.
    pub last_24h: f64,
    /// Score over the trailing 7 days.
    pub last_7d: f64,
    /// Score over the trailing 30 days.
    pub last_30d: f64,
}

impl ReputationSignal {
    /// The signal assigned to handles the provider has never seen.
    pub fn zero() -> Self {
        Self {
            all_time: 0.0,
            last_24h: 0.0,
            last_7d: 0.0,
            last_30d: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_signal_is_all_zero() {
        let signal = ReputationSignal::zero();
        assert_eq!(signal.all_time, 0.0);
        assert_eq!(signal.last_24h, 0.0);
        assert_eq!(signal.last_7d, 0.0);
        assert_eq!(signal.last_30d, 0.0);
    }

    #[test]
    fn onchain_signal_serde_roundtrip() {
        let signal = OnchainSignal {
            verified: true,
            ens_name: Some("vitalik.eth".into()),
            transaction_count: 1000,
            nft_count: 3,
        };
        let json = serde_json::to_string(&signal).unwrap();
        let back: OnchainSignal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signal);
    }
}
