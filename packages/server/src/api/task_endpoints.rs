//! Task Endpoints
//!
//! CRUD over the node store plus the API index. Bodies are taken as raw
//! bytes and parsed explicitly so that every failure path, malformed JSON
//! included, comes back as the structured `{"error": ...}` payload instead
//! of a framework plain-text rejection.
//!
//! # Endpoints
//!
//! - `GET /` - API index (name, version, endpoint listing)
//! - `GET /api/tasks` - List every task and project
//! - `POST /api/tasks` - Create a task or project
//! - `GET /api/tasks/:id` - Get a task by ID
//! - `PUT /api/tasks/:id` - Sparse-update a task
//! - `DELETE /api/tasks/:id` - Delete a task and its whole subtree

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};

use crate::api::{ApiError, AppState};
use taskforge_core::{Node, NodeDraft, NodeUpdate};

/// API index
///
/// Returns the service name, version, and a map of every endpoint the API
/// serves. Handy as a liveness probe and as in-band documentation.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/
/// ```
async fn api_index() -> Json<Value> {
    Json(json!({
        "message": "Task Forge API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /api/tasks": "List all tasks and projects",
            "POST /api/tasks": "Create a task or project",
            "GET /api/tasks/<id>": "Get a single task",
            "PUT /api/tasks/<id>": "Update a task",
            "DELETE /api/tasks/<id>": "Delete a task and its subtree",
            "GET /api/search?q=<query>": "Search tasks by text"
        }
    }))
}

/// List every task and project, in creation order
async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Node>> {
    let store = state.store.lock().await;
    Json(store.all())
}

/// Create a new task or project
///
/// The only required field is a non-empty `title`; everything else gets a
/// default from the store.
///
/// # Request Body
///
/// JSON object with any subset of the node fields.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/tasks \
///   -H "Content-Type: application/json" \
///   -d '{
///     "title": "Buy groceries",
///     "priority": "high",
///     "tags": ["errand"]
///   }'
/// ```
async fn create_task(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Node>), ApiError> {
    let draft: NodeDraft = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("❌ Task creation failed: unparseable body: {}", e);
        ApiError::internal(format!("Invalid request body: {}", e))
    })?;

    if draft.title.as_deref().unwrap_or("").is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let node = state.store.lock().await.create(draft);
    tracing::debug!("✅ Created task: {}", node.id);

    Ok((StatusCode::CREATED, Json(node)))
}

/// Get a task by ID
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/tasks/1
/// ```
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Node>, ApiError> {
    let store = state.store.lock().await;
    store
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Task not found"))
}

/// Update an existing task
///
/// Sparse update: only fields present in the body are touched. An explicit
/// JSON `null` clears `description`, `notes` or `parent_id`.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:5000/api/tasks/1 \
///   -H "Content-Type: application/json" \
///   -d '{"is_completed": true, "notes": null}'
/// ```
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Node>, ApiError> {
    let update: NodeUpdate = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("❌ Task update failed for {}: unparseable body: {}", id, e);
        ApiError::internal(format!("Invalid request body: {}", e))
    })?;

    let mut store = state.store.lock().await;
    match store.update(&id, update) {
        Some(node) => {
            tracing::debug!("✅ Updated task: {}", id);
            Ok(Json(node))
        }
        None => Err(ApiError::not_found("Task not found")),
    }
}

/// Delete a task and its entire subtree
///
/// Unknown ids get a 404; the cascade itself always succeeds. The existence
/// check and the delete run under the same lock acquisition, so no other
/// request can slip in between them.
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.lock().await;

    if store.get(&id).is_none() {
        return Err(ApiError::not_found("Task not found"));
    }
    store.delete(&id);
    tracing::debug!("✅ Deleted task {} and its subtree", id);

    Ok(Json(json!({ "message": "Task deleted successfully" })))
}

/// Create router with the index and all task endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_index))
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks", post(create_task))
        .route("/api/tasks/:id", get(get_task))
        .route("/api/tasks/:id", put(update_task))
        .route("/api/tasks/:id", delete(delete_task))
        .with_state(state)
}
