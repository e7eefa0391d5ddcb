//! HTTP client for the social-reputation API.

use crate::error::ProviderError;
use crate::ReputationSource;

use airgate_types::{ReputationSignal, SocialHandle};
use reqwest::StatusCode;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// Default timeout for reputation requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the social-reputation provider.
///
/// Sends `GET /v1/score?handle={handle}` and parses the four engagement
/// windows. Handles the provider has never seen come back as an all-zero
/// signal, never as an error.
pub struct ReputationClient {
    /// Base URL of the reputation API.
    base_url: String,
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
}

/// Raw JSON response from the score endpoint.
///
/// Fields the provider omits default to zero, matching its documented
/// behavior for sparse histories.
#[derive(Debug, Deserialize)]
struct ScoreResponse {
    #[serde(default)]
    all_time: f64,
    #[serde(default)]
    last_24h: f64,
    #[serde(default)]
    last_7d: f64,
    #[serde(default)]
    last_30d: f64,
}

impl ReputationClient {
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
            http_client,
        }
    }

    /// Fetch the score summary for `handle`.
    pub async fn lookup(&self, handle: &SocialHandle) -> Result<ReputationSignal, ProviderError> {
        let url = self.score_url();
        let response = self
            .http_client
            .get(&url)
            .query(&[("handle", handle.as_str())])
            .send()
            .await
            .map_err(ProviderError::from_send)?;

        // Unknown handle: a valid zero-score signal, not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(handle = %handle, "handle unknown to reputation provider");
            return Ok(ReputationSignal::zero());
        }
        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP status {} from {}",
                response.status(),
                url
            )));
        }

        // Some deployments answer 200 with a null body for unknown handles.
        let body: Option<ScoreResponse> = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse score response: {e}"))
        })?;
        let Some(scores) = body else {
            tracing::debug!(handle = %handle, "empty score body, normalizing to zero");
            return Ok(ReputationSignal::zero());
        };

        scores.into_signal()
    }

    fn score_url(&self) -> String {
        format!("{}/v1/score", self.base_url)
    }
}

impl ScoreResponse {
    /// Convert into a [`ReputationSignal`], rejecting payloads that violate
    /// the non-negative invariant.
    fn into_signal(self) -> Result<ReputationSignal, ProviderError> {
        let windows = [self.all_time, self.last_24h, self.last_7d, self.last_30d];
        if windows.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ProviderError::InvalidResponse(format!(
                "negative or non-finite score in response: {windows:?}"
            )));
        }
        Ok(ReputationSignal {
            all_time: self.all_time,
            last_24h: self.last_24h,
            last_7d: self.last_7d,
            last_30d: self.last_30d,
        })
    }
}

impl ReputationSource for ReputationClient {
    fn lookup_reputation(
        &self,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ReputationSignal, ProviderError>> + Send {
        self.lookup(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_url_is_versioned() {
        let client = ReputationClient::new("https://reputation.example/");
        assert_eq!(client.score_url(), "https://reputation.example/v1/score");
    }

    #[test]
    fn score_response_deserialization() {
        let json = r#"{"all_time": 12.5, "last_24h": 0.3, "last_7d": 2.1, "last_30d": 8.0}"#;
        let scores: ScoreResponse = serde_json::from_str(json).unwrap();
        let signal = scores.into_signal().unwrap();
        assert_eq!(signal.all_time, 12.5);
        assert_eq!(signal.last_30d, 8.0);
    }

    #[test]
    fn missing_windows_default_to_zero() {
        let scores: ScoreResponse = serde_json::from_str(r#"{"all_time": 7.0}"#).unwrap();
        let signal = scores.into_signal().unwrap();
        assert_eq!(signal.all_time, 7.0);
        assert_eq!(signal.last_24h, 0.0);
    }

    #[test]
    fn null_body_parses_as_none() {
        let body: Option<ScoreResponse> = serde_json::from_str("null").unwrap();
        assert!(body.is_none());
    }

    #[test]
    fn negative_scores_are_rejected() {
        let scores: ScoreResponse = serde_json::from_str(r#"{"all_time": -1.0}"#).unwrap();
        assert!(scores.into_signal().is_err());
    }

    #[test]
    fn nan_scores_are_rejected() {
        let scores = ScoreResponse {
            all_time: f64::NAN,
            last_24h: 0.0,
            last_7d: 0.0,
            last_30d: 0.0,
        };
        assert!(scores.into_signal().is_err());
    }
}
