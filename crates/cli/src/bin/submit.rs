//! AssetBench submit driver
//!
//! Initializes the TransferAsset workload module against a ledger gateway
//! and submits it a fixed number of times.
//!
//! # Usage
//!
//! ```bash
//! # Submit once using bench.toml
//! assetbench-submit --config bench.toml
//!
//! # Submit 100 times as worker 2 of 4 in round 1
//! assetbench-submit --config bench.toml -n 100 --worker-index 2 --total-workers 4 --round-index 1
//!
//! # Point at a different gateway
//! assetbench-submit --config bench.toml --gateway-url http://10.0.0.5:3000
//! ```

use anyhow::{bail, Context, Result};
use assetbench_cli::{run_round, BenchConfig, RoundPlan};
use assetbench_connector::GatewayClient;
use assetbench_workload::{create_workload_module, SutContext};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// AssetBench submit driver
///
/// Runs one round of TransferAsset submissions against a ledger gateway.
#[derive(Parser, Debug)]
#[command(name = "assetbench-submit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// Number of submissions
    #[arg(short = 'n', long, default_value = "1")]
    count: u64,

    /// 0-based index of this worker
    #[arg(long, default_value = "0")]
    worker_index: usize,

    /// Total number of workers in the round
    #[arg(long, default_value = "1")]
    total_workers: usize,

    /// 0-based index of the round
    #[arg(long, default_value = "0")]
    round_index: usize,

    /// Gateway base URL (overrides config)
    #[arg(long)]
    gateway_url: Option<String>,

    /// Seconds to wait for the gateway health probe before starting (0 skips the probe)
    #[arg(long, default_value = "10")]
    wait_ready_secs: u64,

    /// Log level filter (overrides RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = BenchConfig::load(&cli.config)?;
    if let Some(ref url) = cli.gateway_url {
        config.connector.gateway_url = url.clone();
    }

    let client = GatewayClient::new(&config.connector).context("Invalid connector config")?;
    info!(gateway = client.base_url(), "Connector ready");

    if cli.wait_ready_secs > 0 {
        wait_for_ready(&client, Duration::from_secs(cli.wait_ready_secs)).await?;
    }

    let plan = RoundPlan {
        worker_index: cli.worker_index,
        total_workers: cli.total_workers,
        round_index: cli.round_index,
        submissions: cli.count,
    };

    let mut module = create_workload_module();
    let report = run_round(
        module.as_mut(),
        Arc::new(client),
        SutContext::default(),
        &config.round,
        &plan,
    )
    .await
    .context("Round failed")?;

    report.print();

    if report.all_failed() {
        bail!("All {} submissions failed", report.submitted);
    }

    Ok(())
}

async fn wait_for_ready(client: &GatewayClient, timeout: Duration) -> Result<()> {
    let start = Instant::now();

    while start.elapsed() < timeout {
        if client.is_ready().await {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    warn!(
        gateway = client.base_url(),
        timeout_secs = timeout.as_secs(),
        "Gateway did not become ready"
    );
    bail!("Gateway {} not ready within {:?}", client.base_url(), timeout)
}
