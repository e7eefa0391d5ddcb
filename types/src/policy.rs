//! Eligibility policy — the configurable thresholds behind the verdict.
//!
//! Both values started life as hard-coded literals (`score > 5`, and
//! "ENS OR transactions OR NFTs" for wallet verification). They are kept as
//! configuration so deployments can tune them without a rebuild.

use serde::{Deserialize, Serialize};

/// Default minimum all-time reputation score. The score must be strictly
/// greater than this to pass.
pub const DEFAULT_MIN_SCORE: f64 = 5.0;

/// Thresholds applied by the eligibility engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    /// A handle passes when its all-time score is strictly greater than this.
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Which on-chain facts count toward wallet verification.
///
/// An address is verified when ANY enabled disjunct holds. All disjuncts are
/// enabled by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationPredicate {
    /// A reverse-resolved ENS name counts as verification.
    #[serde(default = "default_true")]
    pub count_ens_name: bool,
    /// Any past transaction counts as verification.
    #[serde(default = "default_true")]
    pub count_transactions: bool,
    /// Any NFT holding counts as verification.
    #[serde(default = "default_true")]
    pub count_nft_holdings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for VerificationPredicate {
    fn default() -> Self {
        Self {
            count_ens_name: true,
            count_transactions: true,
            count_nft_holdings: true,
        }
    }
}

impl VerificationPredicate {
    /// Apply the predicate to the raw on-chain facts.
    pub fn is_verified(
        &self,
        ens_name: Option<&str>,
        transaction_count: u64,
        nft_count: u64,
    ) -> bool {
        (self.count_ens_name && ens_name.is_some())
            || (self.count_transactions && transaction_count > 0)
            || (self.count_nft_holdings && nft_count > 0)
    }
}
