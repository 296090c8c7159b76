//! LLM provider adapters for chat generation.

mod error;
mod google;
mod openai;
mod provider;
mod types;

use std::sync::Arc;

use tracing::info;

use crate::config::ProviderConfig;

pub use error::LLMError;
pub use google::{EMPTY_REPLY_FALLBACK, GoogleProvider};
pub use openai::OpenAIProvider;
pub use provider::LLMProvider;
pub use types::{GenerateRequest, Message, Role};

/// Build the provider branch selected at startup.
///
/// The returned handle is immutable for the process lifetime; every request
/// goes through it.
pub fn build_provider(config: &ProviderConfig) -> Arc<dyn LLMProvider> {
    match config {
        ProviderConfig::Google { api_key, model } => {
            info!(%model, "Registered Google provider");
            Arc::new(GoogleProvider::new(api_key.clone(), model.clone()))
        }
        ProviderConfig::OpenAI { api_key, model } => {
            info!(%model, "Registered OpenAI provider");
            Arc::new(OpenAIProvider::new(api_key.clone(), model.clone()))
        }
    }
}
