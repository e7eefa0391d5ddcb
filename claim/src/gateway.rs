//! Claim gateway — the collaborator that checks and submits claims.

use crate::error::ClaimError;

use airgate_types::{SocialHandle, WalletAddress};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Default timeout for claim requests. Submission waits for the relayer to
/// broadcast the transaction, so this is longer than the lookup timeouts.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of a successful claim submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    /// The claiming address.
    pub address: WalletAddress,
    /// The handle recorded with the claim.
    pub handle: SocialHandle,
    /// Hash of the submitted claim transaction.
    pub transaction_hash: String,
}

/// Capability: check claim status and submit a claim for an address.
pub trait ClaimGateway: Send + Sync {
    /// Whether `address` has already claimed.
    fn has_claimed(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<bool, ClaimError>> + Send;

    /// Submit a claim, passing the handle and address as transaction
    /// arguments. Implementations must surface "already claimed" as
    /// [`ClaimError::AlreadyClaimed`].
    fn submit_claim(
        &self,
        address: &WalletAddress,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ClaimReceipt, ClaimError>> + Send;
}

impl<T: ClaimGateway> ClaimGateway for std::sync::Arc<T> {
    fn has_claimed(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<bool, ClaimError>> + Send {
        self.as_ref().has_claimed(address)
    }

    fn submit_claim(
        &self,
        address: &WalletAddress,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ClaimReceipt, ClaimError>> + Send {
        self.as_ref().submit_claim(address, handle)
    }
}

/// HTTP implementation backed by a claim relayer.
///
/// `GET /v1/claims/{address}` answers the status check;
/// `POST /v1/claims` submits, with HTTP 409 meaning the contract reports
/// the address as already claimed.
pub struct HttpClaimGateway {
    /// Base URL of the relayer API.
    base_url: String,
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
}

/// `GET /v1/claims/{address}` response body.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    claimed: bool,
}

/// `POST /v1/claims` request body.
#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    address: &'a str,
    handle: &'a str,
}

/// `POST /v1/claims` response body.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    transaction_hash: String,
}

impl HttpClaimGateway {
    /// Create a gateway with default timeout settings.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a gateway with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    fn status_url(&self, address: &WalletAddress) -> String {
        format!("{}/v1/claims/{}", self.base_url, address)
    }

    fn submit_url(&self) -> String {
        format!("{}/v1/claims", self.base_url)
    }

    async fn fetch_status(&self, address: &WalletAddress) -> Result<bool, ClaimError> {
        let url = self.status_url(address);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(ClaimError::SubmissionFailed(format!(
                "HTTP status {} from {}",
                response.status(),
                url
            )));
        }

        let body: StatusResponse = response.json().await.map_err(|e| {
            ClaimError::InvalidResponse(format!("failed to parse claim status: {e}"))
        })?;
        Ok(body.claimed)
    }

    async fn post_claim(
        &self,
        address: &WalletAddress,
        handle: &SocialHandle,
    ) -> Result<ClaimReceipt, ClaimError> {
        let url = self.submit_url();
        let response = self
            .http_client
            .post(&url)
            .json(&SubmitRequest {
                address: address.as_str(),
                handle: handle.as_str(),
            })
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status() == StatusCode::CONFLICT {
            return Err(ClaimError::AlreadyClaimed(address.clone()));
        }
        if !response.status().is_success() {
            return Err(ClaimError::SubmissionFailed(format!(
                "HTTP status {} from {}",
                response.status(),
                url
            )));
        }

        let body: SubmitResponse = response.json().await.map_err(|e| {
            ClaimError::InvalidResponse(format!("failed to parse claim receipt: {e}"))
        })?;

        Ok(ClaimReceipt {
            address: address.clone(),
            handle: handle.clone(),
            transaction_hash: body.transaction_hash,
        })
    }
}

/// Classify a reqwest transport error.
fn map_send_error(e: reqwest::Error) -> ClaimError {
    if e.is_timeout() {
        ClaimError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        ClaimError::Unreachable(format!("connection failed: {e}"))
    } else {
        ClaimError::SubmissionFailed(e.to_string())
    }
}

impl ClaimGateway for HttpClaimGateway {
    fn has_claimed(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<bool, ClaimError>> + Send {
        self.fetch_status(address)
    }

    fn submit_claim(
        &self,
        address: &WalletAddress,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ClaimReceipt, ClaimError>> + Send {
        self.post_claim(address, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_claim_scoped() {
        let gateway = HttpClaimGateway::new("https://relayer.example/");
        let address =
            WalletAddress::parse("0x00192fb10df37c9fb26829eb2cc623cd1bf599e8").unwrap();
        assert_eq!(
            gateway.status_url(&address),
            "https://relayer.example/v1/claims/0x00192fb10df37c9fb26829eb2cc623cd1bf599e8"
        );
        assert_eq!(gateway.submit_url(), "https://relayer.example/v1/claims");
    }

    #[test]
    fn status_response_deserialization() {
        let body: StatusResponse = serde_json::from_str(r#"{"claimed": true}"#).unwrap();
        assert!(body.claimed);
    }

    #[test]
    fn submit_response_deserialization() {
        let body: SubmitResponse =
            serde_json::from_str(r#"{"transaction_hash": "0xabc123"}"#).unwrap();
        assert_eq!(body.transaction_hash, "0xabc123");
    }
}
