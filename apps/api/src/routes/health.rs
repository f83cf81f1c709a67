use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness check for the service.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Recruitment screening API is running"
    }))
}
