// Health check endpoint handler implementation

use axum::Json;
use serde_json::{json, Value};

/// Handler for GET /health - verifies the API process is serving requests
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
