//! Liveness endpoint

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::http::server::AppState;

/// GET /health - liveness probe
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "blogd",
    }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
