//! HTTP request handlers.

mod chat;
mod health;

pub use chat::{ApiError, ChatRequest, ChatResponse, chat};
pub use health::health;
