//! railway-poi: inspect Private POI balance status from the command line.

use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::{Path, PathBuf};

use railway_types::{
    BalanceBucket, NetworkName, PoiParams, SavedTransaction, SystemClock, Timestamp,
};
use railway_utils::{init_logging, LogFormat};
use railway_wallet_core::{
    max_shield_pending_time_text, transaction_poi_status, wait_time_for_shield_pending,
    NetworkRegistry, StaticNetworkRegistry, Styleguide, WalletConfig,
};

#[derive(Parser)]
#[command(name = "railway-poi", about = "Private POI balance status and shield pending timing")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long, env = "RAILWAY_POI_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "RAILWAY_POI_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "RAILWAY_POI_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show label, color, and message for a transaction's balance bucket.
    Status {
        /// Network the transaction belongs to, e.g. "Ethereum" or "Polygon_Amoy".
        #[arg(long)]
        network: NetworkName,

        /// Balance bucket, e.g. "ShieldPending" or "MissingExternalPOI".
        #[arg(long)]
        bucket: BalanceBucket,

        /// Transaction timestamp in Unix seconds.
        #[arg(long)]
        timestamp: u64,

        /// Transaction id (only echoed back).
        #[arg(long, default_value = "")]
        txid: String,
    },

    /// Print the full standby period for a network.
    #[command(name = "max-pending")]
    MaxPending {
        #[arg(long)]
        network: NetworkName,
    },

    /// Print how many seconds to wait before re-checking a shield.
    #[command(name = "wait-time")]
    WaitTime {
        #[arg(long)]
        network: NetworkName,
    },
}

/// Defaults when no path is given. An explicit path must load.
fn load_config(path: Option<&Path>) -> anyhow::Result<WalletConfig> {
    match path {
        Some(path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(WalletConfig::default()),
    }
}

fn wait_secs(
    registry: &dyn NetworkRegistry,
    network: NetworkName,
    params: &PoiParams,
) -> anyhow::Result<u64> {
    wait_time_for_shield_pending(registry, network, params)
        .ok_or_else(|| anyhow!("network {network} is not configured"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(
        cli.log_format.unwrap_or(config.log_format),
        cli.log_level.as_deref().unwrap_or(&config.log_level),
    );

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let registry = StaticNetworkRegistry::from_config(&config);

    match cli.command {
        Command::Status {
            network,
            bucket,
            timestamp,
            txid,
        } => {
            let network = registry
                .network_for_name(network)
                .ok_or_else(|| anyhow!("network {network} is not configured"))?;
            let tx = SavedTransaction::new(txid, network.name, Timestamp::new(timestamp));
            let status = transaction_poi_status(bucket, &tx, network, &config.poi, &SystemClock);
            let theme = Styleguide::default();

            if cli.json {
                let mut value = serde_json::to_value(&status)?;
                value["resolved_color"] = serde_json::json!(status.resolved_color(&theme));
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{} ({})", status.label, status.resolved_color(&theme));
                if let Some(message) = &status.message {
                    println!("{message}");
                }
            }
        }

        Command::MaxPending { network } => {
            let network = registry
                .network_for_name(network)
                .ok_or_else(|| anyhow!("network {network} is not configured"))?;
            let text = max_shield_pending_time_text(network, &config.poi);
            if cli.json {
                println!("{}", serde_json::json!({ "network": network.name, "max_pending": text }));
            } else {
                println!("{text}");
            }
        }

        Command::WaitTime { network } => {
            let wait = wait_secs(&registry, network, &config.poi)?;
            if cli.json {
                println!("{}", serde_json::json!({ "network": network, "wait_secs": wait }));
            } else {
                println!("{wait}");
            }
        }
    }

    Ok(())
}
