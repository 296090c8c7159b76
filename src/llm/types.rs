//! Common types shared by the provider adapters.

use serde::{Deserialize, Serialize};

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The role of a message sender.
///
/// Deserialization rejects any value outside this set, so role validity is
/// enforced at the parsing boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A provider-agnostic generation request.
///
/// `domain` is the system instruction shaping the assistant's persona; how
/// it reaches the remote API is up to each adapter.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub domain: String,
}
