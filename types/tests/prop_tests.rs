use proptest::prelude::*;

use airgate_types::{SocialHandle, VerificationPredicate, WalletAddress};

proptest! {
    /// Address parsing is insensitive to surrounding whitespace.
    #[test]
    fn address_parse_ignores_padding(body in "[0-9a-fA-F]{40}", pad in "[ \t]{0,4}") {
        let raw = format!("0x{body}");
        let padded = format!("{pad}{raw}{pad}");
        prop_assert_eq!(
            WalletAddress::parse(&padded).unwrap(),
            WalletAddress::parse(&raw).unwrap()
        );
    }

    /// Parsed addresses are always lowercase and prefixed.
    #[test]
    fn address_parse_normalizes(body in "[0-9a-fA-F]{40}") {
        let addr = WalletAddress::parse(&format!("0x{body}")).unwrap();
        prop_assert_eq!(addr.as_str(), format!("0x{}", body.to_lowercase()));
    }

    /// Hex bodies of the wrong length never parse.
    #[test]
    fn address_parse_rejects_wrong_length(body in "[0-9a-f]{1,39}") {
        prop_assert!(WalletAddress::parse(&format!("0x{body}")).is_err());
    }

    /// Handle parsing strips at most one leading `@` and whitespace.
    #[test]
    fn handle_parse_strips_decoration(name in "[A-Za-z0-9_]{1,15}") {
        let plain = SocialHandle::parse(&name).unwrap();
        let decorated = SocialHandle::parse(&format!("  @{name} ")).unwrap();
        prop_assert_eq!(plain.as_str(), name.as_str());
        prop_assert_eq!(decorated, plain);
    }

    /// The default predicate is exactly the three-way disjunction.
    #[test]
    fn default_predicate_is_disjunction(
        has_ens in any::<bool>(),
        tx_count in 0u64..1000,
        nft_count in 0u64..1000,
    ) {
        let predicate = VerificationPredicate::default();
        let ens = has_ens.then(|| "name.eth".to_string());
        prop_assert_eq!(
            predicate.is_verified(ens.as_deref(), tx_count, nft_count),
            has_ens || tx_count > 0 || nft_count > 0
        );
    }

    /// With every disjunct disabled, nothing verifies.
    #[test]
    fn empty_predicate_rejects_everything(
        has_ens in any::<bool>(),
        tx_count in 0u64..1000,
        nft_count in 0u64..1000,
    ) {
        let predicate = VerificationPredicate {
            count_ens_name: false,
            count_transactions: false,
            count_nft_holdings: false,
        };
        let ens = has_ens.then(|| "name.eth".to_string());
        prop_assert!(!predicate.is_verified(ens.as_deref(), tx_count, nft_count));
    }
}
