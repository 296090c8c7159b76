//! Environment-derived process configuration.
//!
//! Everything is read once at startup and held immutable for the process
//! lifetime. A missing credential for the selected provider is a fatal
//! startup error, not a per-request one.

use thiserror::Error;

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    /// Origins allowed to call the relay from a browser.
    pub allowed_origins: Vec<String>,
    pub port: u16,
}

/// The provider branch fixed at startup, with its credential and model.
///
/// Exactly one variant exists per process; every request is served by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Google { api_key: String, model: String },
    OpenAI { api_key: String, model: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_provider = lookup("MODEL_PROVIDER").unwrap_or_else(|| "google".to_string());
        let kind = parse_provider(raw_provider.trim())
            .ok_or_else(|| ConfigError::UnknownProvider(raw_provider.trim().to_string()))?;

        let provider = match kind {
            ProviderKind::Google => ProviderConfig::Google {
                api_key: require_key(&lookup, "GOOGLE_API_KEY")?,
                model: lookup("GEMINI_MODEL").unwrap_or_else(default_gemini_model),
            },
            ProviderKind::OpenAI => ProviderConfig::OpenAI {
                api_key: require_key(&lookup, "OPENAI_API_KEY")?,
                model: lookup("OPENAI_MODEL").unwrap_or_else(default_openai_model),
            },
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(default_allowed_origins)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let port = match lookup("PORT") {
            None => default_port(),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        Ok(Self {
            provider,
            allowed_origins,
            port,
        })
    }
}

/// Provider selection before the credential is attached.
enum ProviderKind {
    Google,
    OpenAI,
}

fn parse_provider(raw: &str) -> Option<ProviderKind> {
    match raw.to_ascii_lowercase().as_str() {
        "google" => Some(ProviderKind::Google),
        "openai" => Some(ProviderKind::OpenAI),
        _ => None,
    }
}

fn require_key(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    match lookup(var) {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey(var)),
    }
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_allowed_origins() -> String {
    "http://localhost:5173".to_string()
}

fn default_port() -> u16 {
    8000
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MODEL_PROVIDER must be 'google' or 'openai', got '{0}'")]
    UnknownProvider(String),

    #[error("{0} is not set")]
    MissingApiKey(&'static str),

    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

// ============================================================================
// Tests
// ============================================================================
