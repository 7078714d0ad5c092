//! Google Gemini `generateContent` wire format.
//!
//! Only the fields needed to send a single-turn prompt with a system instruction
//! and to read the generated text back are modelled. Unknown response fields are
//! ignored.

use serde::{Deserialize, Serialize};

use crate::core::{HttpClientConfig, LanguageModelUsage, ModelConfig, RemoteServiceError};
use crate::provider::constants::gemini;

/// Finish reasons for which a candidate's text must not be surfaced.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "LANGUAGE",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Where and how to reach the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub http_config: HttpClientConfig,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: gemini::API_BASE.to_string(),
            http_config: HttpClientConfig::default(),
        }
    }
}

impl GeminiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Full `generateContent` URL for `model`.
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            gemini::API_VERSION,
            model
        )
    }

    pub(crate) fn auth_header_name(&self) -> &'static str {
        gemini::API_KEY_HEADER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single user turn conditioned on the configured system instruction.
    pub fn new(config: &ModelConfig, prompt: &str) -> Self {
        let system_instruction = Some(config.system_instruction())
            .filter(|instruction| !instruction.is_empty())
            .map(|instruction| Content {
                role: None,
                parts: vec![Part::text(instruction)],
            });

        Self {
            system_instruction,
            contents: vec![Content {
                role: Some(Role::User),
                parts: vec![Part::text(prompt)],
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

impl From<&UsageMetadata> for LanguageModelUsage {
    fn from(usage: &UsageMetadata) -> Self {
        Self {
            prompt_tokens: usage.prompt_token_count,
            completion_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    ///
    /// Fails with [`RemoteServiceError::Blocked`] when the prompt was rejected or
    /// the candidate stopped for a blocking reason, and with
    /// [`RemoteServiceError::MissingText`] when there is nothing to return.
    pub fn text(&self) -> Result<String, RemoteServiceError> {
        let Some(candidate) = self.candidates.first() else {
            return Err(match self.block_reason() {
                Some(reason) => RemoteServiceError::Blocked {
                    reason: reason.to_string(),
                },
                None => RemoteServiceError::MissingText,
            });
        };

        if let Some(reason) = candidate
            .finish_reason
            .as_deref()
            .filter(|reason| BLOCKING_FINISH_REASONS.contains(reason))
        {
            return Err(RemoteServiceError::Blocked {
                reason: reason.to_string(),
            });
        }

        let mut texts = candidate
            .content
            .iter()
            .flat_map(|content| &content.parts)
            .filter_map(|part| part.text.as_deref())
            .peekable();

        if texts.peek().is_none() {
            return Err(RemoteServiceError::MissingText);
        }

        Ok(texts.collect())
    }

    pub fn usage(&self) -> Option<LanguageModelUsage> {
        self.usage_metadata.as_ref().map(LanguageModelUsage::from)
    }

    fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }
}
