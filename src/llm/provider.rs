//! Provider trait bridging the relay to a remote generation API.

use async_trait::async_trait;

use super::error::LLMError;
use super::types::GenerateRequest;

/// A remote LLM generation service reached through its native wire format.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate a reply for the conversation in `request`.
    ///
    /// The returned text is never empty for adapters that define a fallback
    /// reply; see each implementation for its extraction rules.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LLMError>;
}
