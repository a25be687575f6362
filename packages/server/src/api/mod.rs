//! HTTP API layer
//!
//! REST endpoints over the in-memory node store. The layer is organized into
//! modular endpoint modules merged into one router:
//! - `task_endpoints`: API index plus task CRUD under `/api/tasks`
//! - `search_endpoints`: substring search under `/api/search`
//!
//! # Concurrency
//!
//! The store itself is synchronous and single-threaded. All access from the
//! handlers, reads included, goes through one `tokio::sync::Mutex`: id
//! assignment bumps a shared counter and cascade delete mutates the node list
//! while traversing it, so nothing may interleave.
//!
//! # Security
//!
//! - CORS is wide open by default (browser clients on any origin);
//!   CORS_ALLOW_ORIGIN narrows it to a single origin
//! - No authentication

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use taskforge_core::NodeStore;

// Task CRUD and the API index
mod task_endpoints;

// Substring search
mod search_endpoints;

// Shared HTTP error handling
mod http_error;

// Re-export ApiError for use by endpoint modules
pub use http_error::ApiError;

/// The one store instance, serialized behind a single async mutex.
pub type SharedNodeStore = Arc<Mutex<NodeStore>>;

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub store: SharedNodeStore,
}

/// Create the main application router with all endpoint modules
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(task_endpoints::routes(state.clone()))
        .merge(search_endpoints::routes(state))
        .layer(cors_layer())
}

/// Create the CORS layer
///
/// Default: any origin, mirroring the original deployment where arbitrary
/// web frontends talk to the API directly.
/// Configure: CORS_ALLOW_ORIGIN="http://localhost:5173" to pin one origin.
fn cors_layer() -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_credentials(false);

    // Check for custom CORS origin from environment
    if let Ok(custom_origin) = std::env::var("CORS_ALLOW_ORIGIN") {
        layer.allow_origin(
            custom_origin
                .parse::<header::HeaderValue>()
                .expect("Invalid CORS_ALLOW_ORIGIN - must be valid HTTP origin"),
        )
    } else {
        layer.allow_origin(Any)
    }
}

/// Start the HTTP server
///
/// Binds all interfaces so containerized and LAN clients can reach the API.
///
/// # Arguments
///
/// * `store` - The shared node store
/// * `port` - Port to listen on (typically 5000)
///
/// # Errors
///
/// Returns error if the server fails to bind or start.
pub async fn start_server(store: SharedNodeStore, port: u16) -> anyhow::Result<()> {
    let state = AppState { store };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🚀 Task Forge API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
