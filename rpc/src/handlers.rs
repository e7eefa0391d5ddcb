//! RPC request handlers.

use crate::error::RpcError;
use crate::server::AppState;

use airgate_claim::{ClaimGateway, ClaimReceipt};
use airgate_evaluator::EvaluateError;
use airgate_providers::{OnchainSource, ReputationSource};
use airgate_types::{Identity, OnchainSignal, ReputationSignal, SocialHandle, Verdict, WalletAddress};
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

// ── Health ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ── Evaluation ──────────────────────────────────────────────────────────

/// `POST /v1/evaluate` — run the full eligibility decision for an identity.
pub async fn evaluate<O, R, G>(
    State(state): State<Arc<AppState<O, R, G>>>,
    Json(identity): Json<Identity>,
) -> Result<Json<Verdict>, RpcError>
where
    O: OnchainSource,
    R: ReputationSource,
    G: ClaimGateway,
{
    state.metrics.evaluations_total.inc();
    let started = Instant::now();
    let result = state.engine.evaluate(&identity).await;
    state
        .metrics
        .evaluation_latency_ms
        .observe(started.elapsed().as_secs_f64() * 1000.0);

    match result {
        Ok(verdict) => {
            if verdict.eligible {
                state.metrics.verdicts_eligible.inc();
            } else {
                state.metrics.verdicts_ineligible.inc();
            }
            Ok(Json(verdict))
        }
        Err(e) => {
            match &e {
                EvaluateError::Validation(_) => state.metrics.validation_failures.inc(),
                EvaluateError::SignalUnavailable { .. } => state.metrics.provider_failures.inc(),
            }
            Err(e.into())
        }
    }
}

// ── Raw signals ─────────────────────────────────────────────────────────

/// `GET /v1/onchain/{address}` — the raw on-chain signal for an address.
pub async fn onchain_signal<O, R, G>(
    State(state): State<Arc<AppState<O, R, G>>>,
    Path(address): Path<String>,
) -> Result<Json<OnchainSignal>, RpcError>
where
    O: OnchainSource,
    R: ReputationSource,
    G: ClaimGateway,
{
    let address =
        WalletAddress::parse(&address).map_err(|e| RpcError::InvalidRequest(e.to_string()))?;
    let signal = state.onchain.lookup_onchain(&address).await?;
    Ok(Json(signal))
}

/// `GET /v1/reputation/{handle}` — the raw reputation signal for a handle.
pub async fn reputation_signal<O, R, G>(
    State(state): State<Arc<AppState<O, R, G>>>,
    Path(handle): Path<String>,
) -> Result<Json<ReputationSignal>, RpcError>
where
    O: OnchainSource,
    R: ReputationSource,
    G: ClaimGateway,
{
    let handle =
        SocialHandle::parse(&handle).map_err(|e| RpcError::InvalidRequest(e.to_string()))?;
    let signal = state.reputation.lookup_reputation(&handle).await?;
    Ok(Json(signal))
}

// ── Claim ───────────────────────────────────────────────────────────────

/// `POST /v1/claim` — run the gated claim flow for an identity.
pub async fn claim<O, R, G>(
    State(state): State<Arc<AppState<O, R, G>>>,
    Json(identity): Json<Identity>,
) -> Result<Json<ClaimReceipt>, RpcError>
where
    O: OnchainSource,
    R: ReputationSource,
    G: ClaimGateway,
{
    match state.flow.claim(&identity).await {
        Ok(receipt) => {
            state.metrics.claims_submitted.inc();
            Ok(Json(receipt))
        }
        Err(e) => {
            state.metrics.claims_rejected.inc();
            Err(e.into())
        }
    }
}

// ── Telemetry ───────────────────────────────────────────────────────────

/// `GET /metrics` — Prometheus text exposition.
pub async fn metrics<O, R, G>(
    State(state): State<Arc<AppState<O, R, G>>>,
) -> Result<impl IntoResponse, RpcError>
where
    O: OnchainSource,
    R: ReputationSource,
    G: ClaimGateway,
{
    let body = state
        .metrics
        .encode()
        .map_err(|e| RpcError::Server(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}
