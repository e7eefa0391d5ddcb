//! Gate configuration with TOML file support.

use crate::error::RpcError;
use airgate_types::{EligibilityPolicy, VerificationPredicate};
use serde::{Deserialize, Serialize};

/// Configuration for the airdrop gate service.
///
/// Can be loaded from a TOML file via [`GateConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). The daemon layers CLI flags and
/// environment variables on top.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// Port the HTTP API listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// On-chain data provider settings.
    #[serde(default)]
    pub onchain: OnchainProviderConfig,

    /// Social-reputation provider settings.
    #[serde(default)]
    pub reputation: ReputationProviderConfig,

    /// Claim relayer settings.
    #[serde(default)]
    pub claim: ClaimGatewayConfig,

    /// Eligibility thresholds.
    #[serde(default)]
    pub policy: EligibilityPolicy,

    /// Which on-chain facts count toward wallet verification.
    #[serde(default)]
    pub predicate: VerificationPredicate,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Whether to expose the Prometheus metrics endpoint.
    #[serde(default = "default_true")]
    pub enable_metrics: bool,
}

/// Settings for the blockchain-data indexer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OnchainProviderConfig {
    /// Base URL of the indexer API.
    #[serde(default = "default_onchain_url")]
    pub base_url: String,

    /// API key, sent as a request header when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_lookup_timeout_secs")]
    pub timeout_secs: u64,
}

/// Settings for the social-reputation API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReputationProviderConfig {
    /// Base URL of the reputation API.
    #[serde(default = "default_reputation_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_lookup_timeout_secs")]
    pub timeout_secs: u64,
}

/// Settings for the claim relayer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClaimGatewayConfig {
    /// Base URL of the relayer API.
    #[serde(default = "default_claim_url")]
    pub base_url: String,

    /// Request timeout in seconds. Submission waits for the transaction to
    /// be broadcast, so the default is longer than the lookup timeout.
    #[serde(default = "default_claim_timeout_secs")]
    pub timeout_secs: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_port() -> u16 {
    8080
}

fn default_onchain_url() -> String {
    "http://localhost:8091".to_string()
}

fn default_reputation_url() -> String {
    "http://localhost:8092".to_string()
}

fn default_claim_url() -> String {
    "http://localhost:8093".to_string()
}

fn default_lookup_timeout_secs() -> u64 {
    10
}

fn default_claim_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_true() -> bool {
    true
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GateConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, RpcError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RpcError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, RpcError> {
        toml::from_str(s).map_err(|e| RpcError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("GateConfig is always serializable to TOML")
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            onchain: OnchainProviderConfig::default(),
            reputation: ReputationProviderConfig::default(),
            claim: ClaimGatewayConfig::default(),
            policy: EligibilityPolicy::default(),
            predicate: VerificationPredicate::default(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            enable_metrics: default_true(),
        }
    }
}

impl Default for OnchainProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_onchain_url(),
            api_key: None,
            timeout_secs: default_lookup_timeout_secs(),
        }
    }
}

impl Default for ReputationProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_reputation_url(),
            timeout_secs: default_lookup_timeout_secs(),
        }
    }
}

impl Default for ClaimGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_claim_url(),
            timeout_secs: default_claim_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = GateConfig::from_toml_str("").unwrap();
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.policy.min_score, 5.0);
        assert!(config.enable_metrics);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let toml = r#"
            listen_port = 9000

            [onchain]
            base_url = "https://indexer.example"
            api_key = "secret"

            [policy]
            min_score = 12.5
        "#;
        let config = GateConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.listen_port, 9000);
        assert_eq!(config.onchain.base_url, "https://indexer.example");
        assert_eq!(config.onchain.api_key.as_deref(), Some("secret"));
        assert_eq!(config.onchain.timeout_secs, 10);
        assert_eq!(config.policy.min_score, 12.5);
        assert_eq!(config.reputation.base_url, "http://localhost:8092");
    }

    #[test]
    fn predicate_toggles_parse() {
        let toml = r#"
            [predicate]
            count_nft_holdings = false
        "#;
        let config = GateConfig::from_toml_str(toml).unwrap();
        assert!(config.predicate.count_ens_name);
        assert!(!config.predicate.count_nft_holdings);
    }

    #[test]
    fn toml_roundtrip() {
        let config = GateConfig::default();
        let back = GateConfig::from_toml_str(&config.to_toml_string()).unwrap();
        assert_eq!(back.listen_port, config.listen_port);
        assert_eq!(back.policy, config.policy);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = GateConfig::from_toml_str("listen_port = \"not a port\"").unwrap_err();
        assert!(matches!(err, RpcError::Config(_)));
    }
}
