//! HTTP client for the blockchain-data indexer.

use crate::error::ProviderError;
use crate::OnchainSource;

use airgate_types::{OnchainSignal, VerificationPredicate, WalletAddress};
use reqwest::StatusCode;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// Default timeout for indexer requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the indexer API key, when one is configured.
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the on-chain data provider.
///
/// Issues the three activity lookups (ENS name, transaction count, NFT
/// count) concurrently and folds them into one [`OnchainSignal`] using the
/// configured [`VerificationPredicate`].
pub struct OnchainClient {
    /// Base URL of the indexer API.
    base_url: String,
    /// Optional API key sent on every request.
    api_key: Option<String>,
    /// Which facts count toward `verified`.
    predicate: VerificationPredicate,
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
}

/// `GET /v1/ens/{address}` response body.
#[derive(Debug, Deserialize)]
struct EnsResponse {
    name: Option<String>,
}

/// `GET /v1/accounts/{address}/tx-count` and `/nft-count` response body.
#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

impl OnchainClient {
    /// Create a client with default timeout settings.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            predicate: VerificationPredicate::default(),
            http_client,
        }
    }

    /// Attach an API key, sent as the `x-api-key` header on every request.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Override the verification predicate.
    pub fn with_predicate(mut self, predicate: VerificationPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Fetch the full activity summary for `address`.
    ///
    /// The three lookups are independent and issued concurrently; the signal
    /// is not produced until all of them resolve, and any failure fails the
    /// whole lookup.
    pub async fn lookup(&self, address: &WalletAddress) -> Result<OnchainSignal, ProviderError> {
        let (ens_name, transaction_count, nft_count) = tokio::join!(
            self.fetch_ens_name(address),
            self.fetch_count(&self.tx_count_url(address)),
            self.fetch_count(&self.nft_count_url(address)),
        );
        let ens_name = ens_name?;
        let transaction_count = transaction_count?;
        let nft_count = nft_count?;

        let verified = self
            .predicate
            .is_verified(ens_name.as_deref(), transaction_count, nft_count);

        tracing::debug!(
            address = %address,
            verified,
            transaction_count,
            nft_count,
            has_ens = ens_name.is_some(),
            "onchain lookup complete"
        );

        Ok(OnchainSignal {
            verified,
            ens_name,
            transaction_count,
            nft_count,
        })
    }

    fn ens_url(&self, address: &WalletAddress) -> String {
        format!("{}/v1/ens/{}", self.base_url, address)
    }

    fn tx_count_url(&self, address: &WalletAddress) -> String {
        format!("{}/v1/accounts/{}/tx-count", self.base_url, address)
    }

    fn nft_count_url(&self, address: &WalletAddress) -> String {
        format!("{}/v1/accounts/{}/nft-count", self.base_url, address)
    }

    /// Build a GET request with the API key header applied, when configured.
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http_client.get(url);
        if let Some(ref key) = self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        request
    }

    /// Reverse-resolve the ENS name for an address.
    ///
    /// A 404 means the address has no name — that is data, not an error.
    async fn fetch_ens_name(
        &self,
        address: &WalletAddress,
    ) -> Result<Option<String>, ProviderError> {
        let url = self.ens_url(address);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(ProviderError::from_send)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP status {} from {}",
                response.status(),
                url
            )));
        }

        let body: EnsResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse ENS response: {e}"))
        })?;
        Ok(body.name)
    }

    /// Fetch a `{ "count": N }` body from one of the count endpoints.
    async fn fetch_count(&self, url: &str) -> Result<u64, ProviderError> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(ProviderError::from_send)?;

        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP status {} from {}",
                response.status(),
                url
            )));
        }

        let body: CountResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse count response: {e}"))
        })?;
        Ok(body.count)
    }
}

impl OnchainSource for OnchainClient {
    fn lookup_onchain(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<OnchainSignal, ProviderError>> + Send {
        self.lookup(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> WalletAddress {
        WalletAddress::parse("0x00192fb10df37c9fb26829eb2cc623cd1bf599e8").unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OnchainClient::new("https://indexer.example/");
        assert_eq!(
            client.ens_url(&address()),
            "https://indexer.example/v1/ens/0x00192fb10df37c9fb26829eb2cc623cd1bf599e8"
        );
    }

    #[test]
    fn count_urls_are_account_scoped() {
        let client = OnchainClient::new("https://indexer.example");
        assert!(client.tx_count_url(&address()).ends_with("/tx-count"));
        assert!(client.nft_count_url(&address()).ends_with("/nft-count"));
    }

    #[test]
    fn ens_response_deserialization() {
        let with_name: EnsResponse = serde_json::from_str(r#"{"name": "vitalik.eth"}"#).unwrap();
        assert_eq!(with_name.name.as_deref(), Some("vitalik.eth"));

        let without: EnsResponse = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(without.name.is_none());
    }

    #[test]
    fn count_response_deserialization() {
        let body: CountResponse = serde_json::from_str(r#"{"count": 42}"#).unwrap();
        assert_eq!(body.count, 42);
    }
}
