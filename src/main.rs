//! HTTP access logging middleware — demo server.
//!
//! Hosts a minimal resource endpoint behind the two logging interceptors:
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ request log ─▶ response log ─▶ handlers
//!                                      │                │
//!                                      │ buffer body,   │ buffer writes,
//!                                      │ replay to      │ log, replay to
//!                                      │ downstream     │ the real caller
//!     Client Response ◀────────────────┴────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use access_log::config::{load_config, AppConfig};
use access_log::http::HttpServer;
use access_log::lifecycle::Shutdown;
use access_log::observability;

#[derive(Parser, Debug)]
#[command(name = "access-log", about = "Demo server for the access logging middleware")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        response_body_limit = config.access_log.response_body_limit,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
