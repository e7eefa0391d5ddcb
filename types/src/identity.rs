//! Wallet address and social handle identifiers.

use crate::error::IdentityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chain-account identifier: `0x` followed by 40 hex digits.
///
/// Parsing trims surrounding whitespace and normalizes the hex body to
/// lowercase, so two addresses that differ only in case compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// The standard prefix for all wallet addresses.
    pub const PREFIX: &'static str = "0x";

    /// Length of the hex body, excluding the prefix.
    pub const HEX_LEN: usize = 40;

    /// Parse and normalize a raw address string.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::MissingAddress);
        }

        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| IdentityError::InvalidAddress(trimmed.to_string()))?;

        if body.len() != Self::HEX_LEN || !body.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdentityError::InvalidAddress(trimmed.to_string()));
        }

        Ok(Self(format!("{}{}", Self::PREFIX, body.to_lowercase())))
    }

    /// Return the normalized address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A social-account identifier.
///
/// Parsing trims whitespace and strips one leading `@`, matching what users
/// paste from their profile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocialHandle(String);

impl SocialHandle {
    /// Parse and normalize a raw handle string.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
        if stripped.is_empty() {
            return Err(IdentityError::MissingHandle);
        }
        Ok(Self(stripped.to_string()))
    }

    /// Return the normalized handle string, without any `@` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SocialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The raw (address, handle) pair submitted for evaluation.
///
/// Fields are kept as plain strings: validation happens when the evaluator
/// parses them into [`WalletAddress`] and [`SocialHandle`], so a malformed
/// identity fails the evaluation rather than request deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Chain-account identifier as submitted.
    pub address: String,
    /// Social-account identifier as submitted.
    pub handle: String,
}

impl Identity {
    pub fn new(address: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            handle: handle.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x00192Fb10dF37c9FB26829eb2CC623cd1BF599E8";

    #[test]
    fn address_parse_normalizes_case() {
        let addr = WalletAddress::parse(ADDR).unwrap();
        assert_eq!(addr.as_str(), ADDR.to_lowercase());
    }

    #[test]
    fn address_parse_trims_whitespace() {
        let addr = WalletAddress::parse(&format!("  {ADDR}\n")).unwrap();
        assert_eq!(addr, WalletAddress::parse(ADDR).unwrap());
    }

    #[test]
    fn address_parse_rejects_empty() {
        assert_eq!(
            WalletAddress::parse("   "),
            Err(IdentityError::MissingAddress)
        );
    }

    #[test]
    fn address_parse_rejects_missing_prefix() {
        let raw = &ADDR[2..];
        assert!(matches!(
            WalletAddress::parse(raw),
            Err(IdentityError::InvalidAddress(_))
        ));
    }

    #[test]
    fn address_parse_rejects_wrong_length() {
        assert!(matches!(
            WalletAddress::parse("0xabc"),
            Err(IdentityError::InvalidAddress(_))
        ));
    }

    #[test]
    fn address_parse_rejects_non_hex() {
        let raw = format!("0x{}", "g".repeat(40));
        assert!(matches!(
            WalletAddress::parse(&raw),
            Err(IdentityError::InvalidAddress(_))
        ));
    }

    #[test]
    fn handle_parse_strips_at_prefix() {
        let handle = SocialHandle::parse("@kaito_fan").unwrap();
        assert_eq!(handle.as_str(), "kaito_fan");
    }

    #[test]
    fn handle_parse_trims_whitespace() {
        let handle = SocialHandle::parse("  @ kaito_fan ").unwrap();
        assert_eq!(handle.as_str(), "kaito_fan");
    }

    #[test]
    fn handle_parse_rejects_empty() {
        assert_eq!(SocialHandle::parse(""), Err(IdentityError::MissingHandle));
        assert_eq!(SocialHandle::parse("@"), Err(IdentityError::MissingHandle));
        assert_eq!(SocialHandle::parse(" @ "), Err(IdentityError::MissingHandle));
    }

    #[test]
    fn identity_serde_roundtrip() {
        let identity = Identity::new(ADDR, "kaito_fan");
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }
}
