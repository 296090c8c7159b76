//! OpenAI-style chat-completions adapter.
//!
//! Roles pass through to the remote API unchanged; `user`, `assistant` and
//! `system` are all valid as-is. The domain instruction is not inserted into
//! the outgoing message list on this path; callers that want the behavioral
//! policy applied here must include it as a `system` message themselves.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::{GenerateRequest, Message};

pub struct OpenAIProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAIProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

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
impl LLMProvider for OpenAIProvider {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = to_request(&self.model, request);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        let completion: CompletionResponse = response.json().await?;
        Ok(extract_reply(completion))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

fn to_request<'a>(model: &'a str, request: &'a GenerateRequest) -> CompletionRequest<'a> {
    CompletionRequest {
        model,
        messages: &request.messages,
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    }
}

/// First choice's content, with `null` treated as empty, trimmed.
fn extract_reply(completion: CompletionResponse) -> String {
    completion
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::Role;

    fn request_with(messages: Vec<Message>) -> GenerateRequest {
        GenerateRequest {
            messages,
            temperature: 0.5,
            max_tokens: 512,
            domain: "policy text".to_string(),
        }
    }

    #[test]
    fn test_request_serialization_passes_roles_through() {
        let request = request_with(vec![
            Message {
                role: Role::System,
                content: "be terse".to_string(),
            },
            Message {
                role: Role::User,
                content: "hola".to_string(),
            },
            Message {
                role: Role::Assistant,
                content: "¡hola!".to_string(),
            },
        ]);

        let json = serde_json::to_value(to_request("gpt-4o-mini", &request)).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 512);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][2]["role"], "assistant");
        assert_eq!(json["messages"][1]["content"], "hola");
    }

    #[test]
    fn test_request_does_not_carry_the_domain_instruction() {
        let request = request_with(vec![Message {
            role: Role::User,
            content: "hola".to_string(),
        }]);

        let json = serde_json::to_string(&to_request("gpt-4o-mini", &request)).unwrap();
        assert!(!json.contains("policy text"));
    }

    #[test]
    fn test_extract_reply_trims_whitespace() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "  hola \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(completion), "hola");
    }

    #[test]
    fn test_extract_reply_null_content_becomes_empty() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(completion), "");
    }

    #[test]
    fn test_extract_reply_without_choices() {
        let completion: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(extract_reply(completion), "");
    }
}
