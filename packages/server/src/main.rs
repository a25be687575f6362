//! Task Forge API Server Binary
//!
//! Starts the REST API over a fresh in-memory store. Everything lives for
//! exactly as long as the process; there is no persistence.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 5000)
//! cargo run --bin taskforge-server
//!
//! # Custom port
//! TASKFORGE_PORT=8080 cargo run --bin taskforge-server
//! ```
//!
//! # Environment Variables
//!
//! - `TASKFORGE_PORT`: Server port (default: 5000)
//! - `CORS_ALLOW_ORIGIN`: Pin CORS to a single origin (default: any)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::sync::Arc;

use taskforge_core::NodeStore;
use taskforge_server::api;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🚀 Task Forge API");
    tracing::info!("==================================");

    // Get server port from environment or use default
    let port = env::var("TASKFORGE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    tracing::info!("📡 Port: {}", port);
    tracing::info!("📦 Store: in-memory (empty on every start)");

    let store = Arc::new(Mutex::new(NodeStore::new()));

    api::start_server(store, port).await?;

    Ok(())
}
