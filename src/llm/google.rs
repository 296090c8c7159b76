//! Google-style generateContent adapter.
//!
//! The remote turn format only recognizes two conversational roles, so
//! `assistant` maps to `model` and everything else maps to `user`. The
//! domain instruction travels in the dedicated `systemInstruction` field,
//! never in the turn sequence.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::{GenerateRequest, Role};

/// Returned when the remote call succeeds but yields no usable text.
pub const EMPTY_REPLY_FALLBACK: &str = "Lo siento, no pude generar una respuesta en este momento.";

pub struct GoogleProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GoogleProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, Self::DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl LLMProvider for GoogleProvider {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LLMError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = to_request(request);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        let generated: GenerateContentResponse = response.json().await?;
        Ok(extract_reply(generated))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Turn>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Turn {
    role: &'static str,
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

/// Map a conversation role onto the two-role turn vocabulary.
fn map_role(role: Role) -> &'static str {
    match role {
        Role::Assistant => "model",
        Role::User | Role::System => "user",
    }
}

fn to_request(request: &GenerateRequest) -> GenerateContentRequest {
    let contents = request
        .messages
        .iter()
        .map(|message| Turn {
            role: map_role(message.role),
            parts: vec![TextPart {
                text: message.content.clone(),
            }],
        })
        .collect();

    GenerateContentRequest {
        contents,
        system_instruction: SystemInstruction {
            parts: vec![TextPart {
                text: request.domain.clone(),
            }],
        },
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    }
}

/// Extraction strategies over the first candidate, tried in order until one
/// yields non-empty text. Exhausting them returns the fixed fallback reply,
/// so this adapter never hands back an empty string.
fn extract_reply(response: GenerateContentResponse) -> String {
    let strategies: [fn(&GenerateContentResponse) -> Option<String>; 2] =
        [joined_text, first_part_text];

    for strategy in strategies {
        if let Some(text) = strategy(&response) {
            let text = text.trim();
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }

    EMPTY_REPLY_FALLBACK.to_string()
}

/// All text parts of the first candidate, concatenated.
fn joined_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    Some(
        content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<String>(),
    )
}

/// Text of the first candidate's first content part.
fn first_part_text(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::Message;
    use crate::prompt::DEFAULT_DOMAIN_PROMPT;

    fn parse_response(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_role_mapping_is_total() {
        assert_eq!(map_role(Role::Assistant), "model");
        assert_eq!(map_role(Role::User), "user");
        assert_eq!(map_role(Role::System), "user");
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            messages: vec![
                Message {
                    role: Role::System,
                    content: "contexto".to_string(),
                },
                Message {
                    role: Role::User,
                    content: "hola".to_string(),
                },
                Message {
                    role: Role::Assistant,
                    content: "¡hola!".to_string(),
                },
            ],
            temperature: 0.5,
            max_tokens: 256,
            domain: "instrucción de sistema".to_string(),
        };

        let json = serde_json::to_value(to_request(&request)).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][1]["role"], "user");
        assert_eq!(json["contents"][2]["role"], "model");
        assert_eq!(json["contents"][1]["parts"][0]["text"], "hola");
        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "instrucción de sistema"
        );
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn test_default_domain_reaches_system_instruction_verbatim() {
        let request = GenerateRequest {
            messages: vec![Message {
                role: Role::User,
                content: "hola".to_string(),
            }],
            temperature: 0.3,
            max_tokens: 512,
            domain: DEFAULT_DOMAIN_PROMPT.to_string(),
        };

        let json = serde_json::to_value(to_request(&request)).unwrap();
        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            DEFAULT_DOMAIN_PROMPT
        );
    }

    #[test]
    fn test_extract_reply_joins_text_parts() {
        let response = parse_response(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "Hola, "}, {"text": "¿en qué te ayudo?"}]}}]}"#,
        );
        assert_eq!(extract_reply(response), "Hola, ¿en qué te ayudo?");
    }

    #[test]
    fn test_extract_reply_trims_whitespace() {
        let response = parse_response(
            r#"{"candidates": [{"content": {"parts": [{"text": "  respuesta  "}]}}]}"#,
        );
        assert_eq!(extract_reply(response), "respuesta");
    }

    #[test]
    fn test_extract_reply_skips_textless_parts() {
        let response = parse_response(
            r#"{"candidates": [{"content": {"parts": [{"text": null}, {"text": "respuesta"}]}}]}"#,
        );
        assert_eq!(extract_reply(response), "respuesta");
    }

    #[test]
    fn test_empty_candidates_yield_fallback_reply() {
        let response = parse_response(r#"{"candidates": []}"#);
        assert_eq!(extract_reply(response), EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn test_missing_candidates_yield_fallback_reply() {
        let response = parse_response(r#"{}"#);
        assert_eq!(extract_reply(response), EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn test_textless_parts_yield_fallback_reply() {
        let response =
            parse_response(r#"{"candidates": [{"content": {"parts": [{"text": null}]}}]}"#);
        assert_eq!(extract_reply(response), EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn test_whitespace_only_text_yields_fallback_reply() {
        let response =
            parse_response(r#"{"candidates": [{"content": {"parts": [{"text": "   \n"}]}}]}"#);
        assert_eq!(extract_reply(response), EMPTY_REPLY_FALLBACK);
    }
}
