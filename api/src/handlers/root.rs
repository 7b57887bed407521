// Service info endpoint handler implementation

use axum::Json;
use serde_json::{json, Value};

/// Handler for GET / - service identification for humans hitting the root
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "service": "wallet-api",
        "status": "ok",
        "health": "/health",
    }))
}
