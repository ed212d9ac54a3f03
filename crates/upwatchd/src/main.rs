//! upwatchd — the upwatch daemon.
//!
//! Polls a YAML list of HTTP endpoints and prints cumulative per-domain
//! availability after every round:
//!
//! ```text
//! api.example.com has 67% availability percentage
//! ```
//!
//! # Usage
//!
//! ```text
//! upwatchd endpoints.yaml
//! upwatchd endpoints.yaml --interval 15
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;
use tracing::info;

use upwatch_core::MonitorConfig;
use upwatch_monitor::{DEFAULT_INTERVAL_SECS, Monitor};

#[derive(Parser)]
#[command(name = "upwatchd", about = "HTTP endpoint availability monitor", version)]
struct Cli {
    /// Path to the YAML endpoint list.
    config_file: PathBuf,

    /// Delay between polling rounds, in seconds.
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    interval: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    // Fatal before the loop starts: unreadable file, malformed YAML,
    // empty list, or a URL without a host.
    let config = MonitorConfig::from_file(&cli.config_file)?;
    info!(
        endpoints = config.endpoints.len(),
        config = %cli.config_file.display(),
        "endpoint list loaded"
    );

    let monitor =
        Monitor::new(config.endpoints).with_interval(Duration::from_secs(cli.interval));

    // Ctrl-C flips the shutdown channel; the monitor finishes its
    // in-flight probe and stops without starting a new round.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
        println!("\nReceived Ctrl+C. Exiting gracefully...");
        let _ = shutdown_tx.send(true);
    });

    monitor.run(shutdown_rx).await;
    Ok(())
}
