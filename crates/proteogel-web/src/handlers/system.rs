//! Service readiness endpoint.

use axum::Json;

pub async fn ready() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Ready to go" }))
}
