//! HTTP API for the airdrop gate.
//!
//! Provides endpoints for:
//! - Eligibility evaluation (`POST /v1/evaluate`)
//! - Raw provider signals (`GET /v1/onchain/{address}`,
//!   `GET /v1/reputation/{handle}`)
//! - Gated claim submission (`POST /v1/claim`)
//! - Liveness (`GET /v1/health`) and Prometheus metrics (`GET /metrics`)
//!
//! CORS is permissive: the expected caller is a browser front end on a
//! different origin.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod server;

pub use config::GateConfig;
pub use error::RpcError;
pub use metrics::GateMetrics;
pub use server::{router, AppState, RpcServer};
