use axum::Json;
use serde_json::{Value, json};

/// GET /health
///
/// Liveness only; does not touch the provider.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
