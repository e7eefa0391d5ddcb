//! Axum-based HTTP server for the gate.

use crate::config::GateConfig;
use crate::error::RpcError;
use crate::handlers;
use crate::metrics::GateMetrics;

use airgate_claim::{ClaimFlow, ClaimGateway, HttpClaimGateway};
use airgate_evaluator::EligibilityEngine;
use airgate_providers::{OnchainClient, OnchainSource, ReputationClient, ReputationSource};
use airgate_types::EligibilityPolicy;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state behind every handler.
///
/// The engine and the claim flow share the collaborator instances through
/// `Arc`; the fields hold the same instances the handlers use.
pub struct AppState<O, R, G> {
    pub onchain: Arc<O>,
    pub reputation: Arc<R>,
    pub gateway: Arc<G>,
    pub engine: EligibilityEngine<Arc<O>, Arc<R>>,
    pub flow: ClaimFlow<Arc<O>, Arc<R>, Arc<G>>,
    pub metrics: GateMetrics,
}

impl<O, R, G> AppState<O, R, G>
where
    O: OnchainSource,
    R: ReputationSource,
    G: ClaimGateway,
{
    pub fn new(onchain: O, reputation: R, gateway: G, policy: EligibilityPolicy) -> Self {
        let onchain = Arc::new(onchain);
        let reputation = Arc::new(reputation);
        let gateway = Arc::new(gateway);
        let engine = EligibilityEngine::with_policy(
            Arc::clone(&onchain),
            Arc::clone(&reputation),
            policy,
        );
        let flow = ClaimFlow::new(engine.clone(), Arc::clone(&gateway));
        Self {
            onchain,
            reputation,
            gateway,
            engine,
            flow,
            metrics: GateMetrics::new(),
        }
    }
}

/// Build the gate's router around shared state.
pub fn router<O, R, G>(state: Arc<AppState<O, R, G>>, enable_metrics: bool) -> Router
where
    O: OnchainSource + 'static,
    R: ReputationSource + 'static,
    G: ClaimGateway + 'static,
{
    let mut app = Router::new()
        .route("/v1/evaluate", post(handlers::evaluate::<O, R, G>))
        .route("/v1/onchain/:address", get(handlers::onchain_signal::<O, R, G>))
        .route(
            "/v1/reputation/:handle",
            get(handlers::reputation_signal::<O, R, G>),
        )
        .route("/v1/claim", post(handlers::claim::<O, R, G>))
        .route("/v1/health", get(handlers::health));
    if enable_metrics {
        app = app.route("/metrics", get(handlers::metrics::<O, R, G>));
    }
    app.layer(CorsLayer::permissive()).with_state(state)
}

/// The production state type: real HTTP collaborators.
pub type GateState = AppState<OnchainClient, ReputationClient, HttpClaimGateway>;

/// Build the on-chain client described by `config`.
pub fn build_onchain_client(config: &GateConfig) -> OnchainClient {
    let mut client = OnchainClient::with_timeout(
        &config.onchain.base_url,
        Duration::from_secs(config.onchain.timeout_secs),
    )
    .with_predicate(config.predicate);
    if let Some(ref key) = config.onchain.api_key {
        client = client.with_api_key(key);
    }
    client
}

/// Build the reputation client described by `config`.
pub fn build_reputation_client(config: &GateConfig) -> ReputationClient {
    ReputationClient::with_timeout(
        &config.reputation.base_url,
        Duration::from_secs(config.reputation.timeout_secs),
    )
}

/// Build the claim gateway described by `config`.
pub fn build_claim_gateway(config: &GateConfig) -> HttpClaimGateway {
    HttpClaimGateway::with_timeout(
        &config.claim.base_url,
        Duration::from_secs(config.claim.timeout_secs),
    )
}

/// The gate's HTTP server.
pub struct RpcServer {
    pub port: u16,
    enable_metrics: bool,
    state: Arc<GateState>,
}

impl RpcServer {
    /// Build the server and its collaborator clients from configuration.
    pub fn from_config(config: &GateConfig) -> Self {
        let onchain = build_onchain_client(config);
        let reputation = build_reputation_client(config);
        let gateway = build_claim_gateway(config);

        Self {
            port: config.listen_port,
            enable_metrics: config.enable_metrics,
            state: Arc::new(AppState::new(onchain, reputation, gateway, config.policy)),
        }
    }

    /// Start the server. Runs until shutdown.
    pub async fn start(&self) -> Result<(), RpcError> {
        let app = router(self.state.clone(), self.enable_metrics);
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        info!("gate API listening on {}", addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        Ok(())
    }
}
