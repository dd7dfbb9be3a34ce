//! CropSmart - crop recommendation service
//!
//! # Usage
//!
//! ```bash
//! # Run the HTTP server (default subcommand)
//! cargo run --release
//!
//! # Bind elsewhere
//! cargo run --release -- serve --addr 127.0.0.1:9000
//!
//! # Resolve a single query without starting the server
//! cargo run -- village "Pune, Maharashtra"
//! cargo run -- coordinates 18.52 73.86
//! ```
//!
//! # Environment Variables
//!
//! - `CROPSMART_CONFIG`: Path to the TOML config file
//! - `CROPSMART_SERVER_ADDR`: Override `server.addr`
//! - `CROPSMART_CORS_ORIGINS`: Comma-separated allowed origins
//! - `CROPSMART_LOG_FORMAT`: `pretty` (default) or `json`
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use cropsmart::api::{create_app, ApiState};
use cropsmart::config::AppConfig;
use cropsmart::recommend::{self, EntropySource};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "cropsmart")]
#[command(about = "CropSmart crop recommendation service")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides CROPSMART_CONFIG and ./cropsmart.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(
        long,
        global = true,
        env = "CROPSMART_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP server (default)
    Serve {
        /// Override the server address (default: "0.0.0.0:8080")
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Resolve a village name and print the recommendation as JSON
    Village {
        /// Village or city, optionally followed by ", State"
        name: String,
    },

    /// Resolve a latitude/longitude pair and print the recommendation as JSON
    Coordinates {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

// ============================================================================
// Logging
// ============================================================================

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

// ============================================================================
// HTTP Server
// ============================================================================

async fn run_server(config: AppConfig) -> Result<()> {
    let server_addr = config.server.addr.clone();

    let entropy = EntropySource::from_seed(config.jitter.seed);
    if let Some(seed) = config.jitter.seed {
        info!(seed, "Confidence jitter is seeded; responses are reproducible");
    }

    let app = create_app(ApiState::new(entropy), &config.server);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  CropSmart - Crop Recommendation Service v{}", env!("CARGO_PKG_VERSION"));
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("✓ HTTP server listening on {}", server_addr);

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            info!("[HttpServer] Received shutdown signal");
        })
        .await
        .context("HTTP server error")?;

    info!("✓ CropSmart shutdown complete");
    Ok(())
}

// ============================================================================
// Offline Queries
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize recommendation")?;
    println!("{text}");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is normal
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    init_tracing(args.log_format);

    // --addr wins over the file and CROPSMART_SERVER_ADDR, and is validated with them
    let addr_override = match &args.command {
        Some(SubCommand::Serve { addr }) => addr.as_deref(),
        _ => None,
    };
    let config = AppConfig::load_with_addr(args.config.as_deref(), addr_override)
        .context("Failed to load configuration")?;

    match args.command {
        None | Some(SubCommand::Serve { .. }) => run_server(config).await,
        Some(SubCommand::Village { name }) => {
            let entropy = EntropySource::from_seed(config.jitter.seed);
            let rec = recommend::recommend_by_village(&name, &entropy)?;
            print_json(&rec)
        }
        Some(SubCommand::Coordinates { latitude, longitude }) => {
            let entropy = EntropySource::from_seed(config.jitter.seed);
            let rec = recommend::recommend_by_coordinates(latitude, longitude, &entropy)?;
            print_json(&rec)
        }
    }
}
