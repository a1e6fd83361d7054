//! PortFlow API Gateway
//!
//! Public HTTP entry point for the PortFlow platform, built with Tokio
//! and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌─────────────────────────────────────────────┐
//!                      │               PORTFLOW GATEWAY               │
//!                      │                                              │
//!     Client Request   │  ┌────────┐    ┌──────────┐    ┌──────────┐ │
//!     ─────────────────┼─▶│  http  │───▶│ handlers │───▶│ upstream │─┼──▶ Prediction
//!                      │  │ server │    │          │    │  client  │ │    Service
//!     Client Response  │  └────────┘    └──────────┘    └──────────┘ │
//!     ◀────────────────┼──────────────────────────────────────────── │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐  │
//!                      │  │         Cross-Cutting Concerns         │  │
//!                      │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │  │
//!                      │  │  │ config │ │ observa-  │ │lifecycle│  │  │
//!                      │  │  │        │ │ bility    │ │         │  │  │
//!                      │  │  └────────┘ └───────────┘ └─────────┘  │  │
//!                      │  └────────────────────────────────────────┘  │
//!                      └─────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use portflow_gateway::config::{load_config, GatewayConfig};
use portflow_gateway::observability;
use portflow_gateway::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "portflow-gateway")]
#[command(about = "API gateway for the PortFlow platform", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. When omitted, defaults
    /// reproduce the reference deployment (127.0.0.1:8000 forwarding
    /// to 127.0.0.1:8001).
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::info!("portflow-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
