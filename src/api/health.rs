//! Health endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Service health plus a best-effort probe of the route backend
async fn health(State(state): State<AppState>) -> Json<Value> {
    let backend = if state.route_client.health_check().await {
        "reachable"
    } else {
        "unreachable"
    };

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "backend": backend,
    }))
}
