mod constants;
pub mod gemini;

pub use gemini::GeminiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
}

impl Provider {
    /// Get the default environment variable name for this provider's API key
    pub fn default_api_key_env_var(&self) -> &'static str {
        match self {
            Provider::Gemini => constants::gemini::API_KEY_ENV_VAR,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => constants::gemini::DEFAULT_MODEL,
        }
    }
}
