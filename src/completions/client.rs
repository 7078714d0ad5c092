//! The completion client: one credential, one fixed model configuration, one
//! operation.

use async_trait::async_trait;

use crate::{
    core::{Credential, HttpClient, LlmError, ModelConfig, TextGenerator},
    provider::gemini::{GenerateContentRequest, GenerateContentResponse, GeminiConfig},
};

/// Sends prompts to Gemini under a fixed [`ModelConfig`] and returns the
/// generated text.
///
/// The configuration is set at construction and cannot be changed afterwards.
/// The client holds no per-call state, so a single instance can serve any
/// number of concurrent [`generate`](Self::generate) calls.
pub struct CompletionClient {
    credential: Credential,
    model_config: ModelConfig,
    endpoint: String,
    auth_header_name: &'static str,
    http: HttpClient,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("model", &self.model_config.model())
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    /// Create a client against the public Gemini API.
    pub fn new(credential: Credential, model_config: ModelConfig) -> Result<Self, LlmError> {
        Self::with_provider_config(credential, model_config, GeminiConfig::default())
    }

    /// Create a client with a custom base URL or transport settings.
    pub fn with_provider_config(
        credential: Credential,
        model_config: ModelConfig,
        provider_config: GeminiConfig,
    ) -> Result<Self, LlmError> {
        let http = HttpClient::new(&provider_config.http_config)?;
        let endpoint = provider_config.endpoint(model_config.model());

        Ok(Self {
            credential,
            endpoint,
            auth_header_name: provider_config.auth_header_name(),
            model_config,
            http,
        })
    }

    pub fn model_config(&self) -> &ModelConfig {
        &self.model_config
    }

    /// Send `prompt` under the fixed system instruction and return the text of
    /// the first candidate.
    ///
    /// The prompt is passed through untouched; empty prompts are allowed. Every
    /// failure is returned as [`LlmError::RemoteService`], nothing is retried.
    #[tracing::instrument(
        name = "generate",
        skip(self, prompt),
        fields(model = %self.model_config.model(), prompt_len = prompt.len()),
        err
    )]
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateContentRequest::new(&self.model_config, prompt);
        let headers = [(self.auth_header_name, self.credential.expose())];

        let response: GenerateContentResponse = self
            .http
            .post_json(&self.endpoint, &headers, &request)
            .await?;

        if let Some(usage) = response.usage() {
            tracing::debug!(
                model_version = response.model_version.as_deref().unwrap_or("unknown"),
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion received"
            );
        }

        Ok(response.text()?)
    }
}

#[async_trait]
impl TextGenerator for CompletionClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        CompletionClient::generate(self, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HttpClientConfig, RemoteServiceError};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

    fn create_client(server: &MockServer) -> CompletionClient {
        let config = GeminiConfig::default()
            .with_base_url(server.uri())
            .with_http_config(HttpClientConfig::default().with_timeout(Duration::from_secs(5)));

        CompletionClient::with_provider_config(
            Credential::new("test-key").unwrap(),
            ModelConfig::new("test-model", "You are a reviewer.").unwrap(),
            config,
        )
        .expect("Failed to create client")
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 3,
                "candidatesTokenCount": 2,
                "totalTokenCount": 5
            }
        }))
    }

    #[tokio::test]
    async fn sends_credential_in_header_not_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(text_response("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        assert_eq!(client.generate("x").await.unwrap(), "ok");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query().is_none());
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let result = client.generate("x").await;

        match result {
            Err(LlmError::RemoteService(RemoteServiceError::Api {
                status_code: 503,
                message,
            })) => assert_eq!(message, "overloaded"),
            other => panic!("Expected 503 Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json"))
            .mount(&server)
            .await;

        let client = create_client(&server);
        match client.generate("x").await {
            Err(LlmError::RemoteService(RemoteServiceError::Parse { .. })) => (),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn custom_user_agent_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("user-agent", "review-bot/1.0"))
            .respond_with(text_response("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let config = GeminiConfig::default()
            .with_base_url(server.uri())
            .with_http_config(HttpClientConfig::default().with_user_agent("review-bot/1.0"));
        let client = CompletionClient::with_provider_config(
            Credential::new("test-key").unwrap(),
            ModelConfig::new("test-model", "").unwrap(),
            config,
        )
        .unwrap();

        assert_eq!(client.generate("x").await.unwrap(), "ok");
    }

    #[test]
    fn debug_output_omits_credential() {
        let client = CompletionClient::new(
            Credential::new("very-secret").unwrap(),
            ModelConfig::code_review(),
        )
        .unwrap();

        let rendered = format!("{client:?}");
        assert!(rendered.contains("gemini-2.0-flash"));
        assert!(!rendered.contains("very-secret"));
    }
}
