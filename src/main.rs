//! Grumblr server binary.
//!
//! Starts the HTTP side of the isomorphic blog: loads configuration,
//! seeds the in-memory post store, and serves server-rendered pages
//! plus the client bundle. The client runtime in `grumblr::client`
//! shares the routing and view code compiled into this same crate.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grumblr::config::{load_config, AppConfig};
use grumblr::store::MemoryStore;
use grumblr::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "grumblr", about = "Isomorphic blog server")]
struct Args {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grumblr=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("grumblr v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        bundle_path = %config.bundle.path,
        "Configuration loaded"
    );

    // Seed the post table, like a fresh table bootstrap would.
    let store = Arc::new(MemoryStore::with_seed_posts());
    tracing::info!(posts = store.len(), "Post store seeded");

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            grumblr::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
