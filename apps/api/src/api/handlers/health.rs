use axum::Json;
use serde_json::{json, Value};

/// Service banner
///
/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Code agent API is running" }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
