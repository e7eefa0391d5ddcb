use proptest::prelude::*;

use airgate_evaluator::{
    decide, CLAUSE_SCORE_TOO_LOW, CLAUSE_WALLET_NOT_VERIFIED, REASON_ELIGIBLE,
};
use airgate_types::{EligibilityPolicy, OnchainSignal, ReputationSignal};

fn onchain(verified: bool) -> OnchainSignal {
    OnchainSignal {
        verified,
        ens_name: None,
        transaction_count: 0,
        nft_count: 0,
    }
}

fn reputation(all_time: f64) -> ReputationSignal {
    ReputationSignal {
        all_time,
        last_24h: 0.0,
        last_7d: 0.0,
        last_30d: 0.0,
    }
}

proptest! {
    /// The verdict is exactly the conjunction of the two checks.
    #[test]
    fn verdict_is_the_conjunction(
        verified in any::<bool>(),
        score in 0.0f64..100.0,
        threshold in 0.0f64..100.0,
    ) {
        let policy = EligibilityPolicy { min_score: threshold };
        let verdict = decide(&policy, onchain(verified), reputation(score));
        prop_assert_eq!(verdict.eligible, verified && score > threshold);
    }

    /// Each failure clause appears exactly when its condition holds, and the
    /// success message appears only on eligible verdicts.
    #[test]
    fn reason_clauses_match_conditions(
        verified in any::<bool>(),
        score in 0.0f64..100.0,
        threshold in 0.0f64..100.0,
    ) {
        let policy = EligibilityPolicy { min_score: threshold };
        let verdict = decide(&policy, onchain(verified), reputation(score));

        if verdict.eligible {
            prop_assert_eq!(verdict.reason.as_str(), REASON_ELIGIBLE);
        } else {
            prop_assert_eq!(
                verdict.reason.contains(CLAUSE_WALLET_NOT_VERIFIED),
                !verified
            );
            prop_assert_eq!(
                verdict.reason.contains(CLAUSE_SCORE_TOO_LOW),
                score <= threshold
            );
        }
    }

    /// The decision is a pure function: same inputs, same verdict.
    #[test]
    fn decision_is_deterministic(
        verified in any::<bool>(),
        score in 0.0f64..100.0,
    ) {
        let policy = EligibilityPolicy::default();
        let first = decide(&policy, onchain(verified), reputation(score));
        let second = decide(&policy, onchain(verified), reputation(score));
        prop_assert_eq!(first, second);
    }

    /// The verdict always carries back the signals it was derived from.
    #[test]
    fn verdict_carries_its_signals(
        verified in any::<bool>(),
        score in 0.0f64..100.0,
    ) {
        let policy = EligibilityPolicy::default();
        let verdict = decide(&policy, onchain(verified), reputation(score));
        prop_assert_eq!(verdict.signals.onchain, onchain(verified));
        prop_assert_eq!(verdict.signals.reputation, reputation(score));
    }
}
