use std::fmt;

use super::error::LlmError;

/// Secret token authorizing calls to the remote service.
///
/// Never printed: there is no `Display` impl and `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an explicit secret. Empty or whitespace-only values are rejected.
    pub fn new(secret: impl Into<String>) -> Result<Self, LlmError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(LlmError::Configuration(
                "credential is empty".to_string(),
            ));
        }
        Ok(Self(secret))
    }

    /// Read the credential from the default environment variable.
    ///
    /// default variable: `GOOGLE_GEMINI_KEY`
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_env_var(crate::provider::Provider::Gemini.default_api_key_env_var())
    }

    pub fn from_env_var(name: &str) -> Result<Self, LlmError> {
        let secret = std::env::var(name)
            .map_err(|e| LlmError::Configuration(format!("{name} not set: {e}")))?;
        Self::new(secret).map_err(|_| LlmError::Configuration(format!("{name} is empty")))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Model identifier and system instruction, fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub(crate) model: String,
    pub(crate) system_instruction: String,
}

impl ModelConfig {
    pub fn new(
        model: impl Into<String>,
        system_instruction: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(LlmError::Configuration(
                "model identifier is empty".to_string(),
            ));
        }

        Ok(Self {
            model,
            system_instruction: system_instruction.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}

/// Token accounting reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageModelUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
