//! Search Endpoints
//!
//! Case-insensitive substring search over titles, descriptions and tags.
//!
//! # Endpoints
//!
//! - `GET /api/search?q=<query>` - Search tasks by text

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::api::{ApiError, AppState};
use taskforge_core::Node;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The text to look for; required and non-empty
    q: Option<String>,
}

/// Search tasks by text
///
/// Matches when the query appears (case-insensitively) in a task's title,
/// description, or any of its tags. A missing or empty `q` is rejected.
///
/// # Example
///
/// ```bash
/// curl "http://localhost:5000/api/search?q=urgent"
/// ```
async fn search_tasks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Node>>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::validation("Search query is required"));
    }

    let store = state.store.lock().await;
    let matches = store.search(&query);
    tracing::debug!("🔍 Search '{}' matched {} task(s)", query, matches.len());

    Ok(Json(matches))
}

/// Create router with the search endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search_tasks))
        .with_state(state)
}
