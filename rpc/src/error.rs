//! RPC error types and their HTTP status mapping.

use airgate_claim::ClaimError;
use airgate_evaluator::EvaluateError;
use airgate_providers::ProviderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Evaluation(#[from] EvaluateError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("server error: {0}")]
    Server(String),
}

impl RpcError {
    /// The HTTP status this error surfaces as.
    ///
    /// Caller mistakes are 4xx; upstream collaborator trouble is 502 so
    /// clients know a retry may succeed.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RpcError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RpcError::Config(_) | RpcError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RpcError::Provider(_) => StatusCode::BAD_GATEWAY,
            RpcError::Evaluation(e) => evaluate_status(e),
            RpcError::Claim(e) => match e {
                ClaimError::NotEligible(_) => StatusCode::FORBIDDEN,
                ClaimError::AlreadyClaimed(_) => StatusCode::CONFLICT,
                ClaimError::Evaluation(inner) => evaluate_status(inner),
                ClaimError::SubmissionFailed(_)
                | ClaimError::Unreachable(_)
                | ClaimError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

fn evaluate_status(e: &EvaluateError) -> StatusCode {
    match e {
        EvaluateError::Validation(_) => StatusCode::BAD_REQUEST,
        EvaluateError::SignalUnavailable { .. } => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = %status, error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airgate_types::{IdentityError, WalletAddress};

    #[test]
    fn validation_maps_to_bad_request() {
        let err = RpcError::Evaluation(EvaluateError::Validation(IdentityError::MissingHandle));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn signal_unavailable_maps_to_bad_gateway() {
        let err = RpcError::Evaluation(EvaluateError::signal_unavailable(
            "onchain",
            ProviderError::Unreachable("connection failed".into()),
        ));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn not_eligible_maps_to_forbidden() {
        let err = RpcError::Claim(ClaimError::NotEligible("score too low".into()));
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn already_claimed_maps_to_conflict() {
        let address =
            WalletAddress::parse("0x00192fb10df37c9fb26829eb2cc623cd1bf599e8").unwrap();
        let err = RpcError::Claim(ClaimError::AlreadyClaimed(address));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn claim_validation_maps_to_bad_request() {
        let err = RpcError::Claim(ClaimError::Evaluation(EvaluateError::Validation(
            IdentityError::MissingAddress,
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
