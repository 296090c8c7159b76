//! Chat relay HTTP handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::llm::{GenerateRequest, LLMError, Message};
use crate::prompt::DEFAULT_DOMAIN_PROMPT;
use crate::server::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_domain")]
    pub domain: String,
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    512
}

fn default_domain() -> String {
    DEFAULT_DOMAIN_PROMPT.to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced to the caller as a `{"detail": ...}` payload.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request: empty message list, invalid role, bad JSON.
    BadRequest(String),
    /// The remote provider call failed; the cause is reported verbatim.
    Upstream(LLMError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// ============================================================================
// Handler
// ============================================================================

/// POST /chat
///
/// Validates the request, relays it to the process-wide provider, and wraps
/// the reply. Body-shape failures (including unknown roles) are reported as
/// 400 rather than axum's default rejection statuses.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    if req.messages.is_empty() {
        return Err(ApiError::BadRequest("messages is required".to_string()));
    }

    let request = GenerateRequest {
        messages: req.messages,
        temperature: req.temperature,
        max_tokens: req.max_tokens,
        domain: req.domain,
    };

    let reply = state.provider.generate(&request).await.map_err(|e| {
        tracing::error!(error = %e, "provider call failed");
        ApiError::Upstream(e)
    })?;

    Ok(Json(ChatResponse { reply }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"messages": [{"role": "user", "content": "hola"}]}"#).unwrap();
        assert_eq!(req.temperature, 0.3);
        assert_eq!(req.max_tokens, 512);
        assert_eq!(req.domain, DEFAULT_DOMAIN_PROMPT);
    }

    #[test]
    fn test_request_overrides() {
        let req: ChatRequest = serde_json::from_str(
            r#"{
                "messages": [{"role": "user", "content": "hola"}],
                "temperature": 0.9,
                "max_tokens": 64,
                "domain": "sé breve"
            }"#,
        )
        .unwrap();
        assert_eq!(req.temperature, 0.9);
        assert_eq!(req.max_tokens, 64);
        assert_eq!(req.domain, "sé breve");
    }

    #[test]
    fn test_missing_messages_field_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.messages.is_empty());
    }

    #[test]
    fn test_invalid_role_fails_deserialization() {
        let result: Result<ChatRequest, _> =
            serde_json::from_str(r#"{"messages": [{"role": "bot", "content": "x"}]}"#);
        assert!(result.is_err());
    }
}
