//! Shared utilities for the airdrop gate.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with};
