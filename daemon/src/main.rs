//! airgate daemon — entry point for running the airdrop gate.

use airgate_evaluator::EligibilityEngine;
use airgate_rpc::server::{build_onchain_client, build_reputation_client};
use airgate_rpc::{GateConfig, RpcServer};
use airgate_types::Identity;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "airgate", about = "Sybil-resistant airdrop gate service")]
struct Cli {
    /// Port for the HTTP API.
    #[arg(long, env = "AIRGATE_LISTEN_PORT")]
    listen_port: Option<u16>,

    /// Base URL of the on-chain data indexer.
    #[arg(long, env = "AIRGATE_ONCHAIN_URL")]
    onchain_url: Option<String>,

    /// API key for the on-chain data indexer.
    #[arg(long, env = "AIRGATE_ONCHAIN_API_KEY", hide_env_values = true)]
    onchain_api_key: Option<String>,

    /// Base URL of the social-reputation API.
    #[arg(long, env = "AIRGATE_REPUTATION_URL")]
    reputation_url: Option<String>,

    /// Base URL of the claim relayer.
    #[arg(long, env = "AIRGATE_CLAIM_URL")]
    claim_url: Option<String>,

    /// Minimum all-time reputation score; a handle passes only when its
    /// score is strictly greater.
    #[arg(long, env = "AIRGATE_MIN_SCORE")]
    min_score: Option<f64>,

    /// Disable the Prometheus metrics endpoint.
    #[arg(long, env = "AIRGATE_DISABLE_METRICS")]
    disable_metrics: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "AIRGATE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the gate HTTP service.
    Serve,
    /// Evaluate one identity and print the verdict as JSON.
    Check {
        /// Wallet address to evaluate.
        #[arg(long)]
        address: String,
        /// Social handle to evaluate.
        #[arg(long)]
        handle: String,
    },
}

impl Cli {
    /// Merge the config file (base) with CLI flags and env vars (overrides).
    fn build_config(&self) -> anyhow::Result<GateConfig> {
        let mut config = match self.config {
            Some(ref path) => {
                let path_str = path.to_string_lossy();
                GateConfig::from_toml_file(&path_str)
                    .with_context(|| format!("failed to load config from {path_str}"))?
            }
            None => GateConfig::default(),
        };

        if let Some(port) = self.listen_port {
            config.listen_port = port;
        }
        if let Some(ref url) = self.onchain_url {
            config.onchain.base_url = url.clone();
        }
        if let Some(ref key) = self.onchain_api_key {
            config.onchain.api_key = Some(key.clone());
        }
        if let Some(ref url) = self.reputation_url {
            config.reputation.base_url = url.clone();
        }
        if let Some(ref url) = self.claim_url {
            config.claim.base_url = url.clone();
        }
        if let Some(min_score) = self.min_score {
            config.policy.min_score = min_score;
        }
        if self.disable_metrics {
            config.enable_metrics = false;
        }
        if let Some(ref level) = self.log_level {
            config.log_level = level.clone();
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.build_config()?;

    airgate_utils::init_tracing_with(&config.log_level, config.log_format == "json");
    if let Some(ref path) = cli.config {
        tracing::info!("loaded config from {}", path.display());
    }

    match cli.command {
        Command::Serve => {
            tracing::info!(
                port = config.listen_port,
                min_score = config.policy.min_score,
                "starting airdrop gate"
            );
            RpcServer::from_config(&config).start().await?;
        }
        Command::Check { address, handle } => {
            let engine = EligibilityEngine::with_policy(
                build_onchain_client(&config),
                build_reputation_client(&config),
                config.policy,
            );
            let verdict = engine.evaluate(&Identity::new(address, handle)).await?;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    Ok(())
}
