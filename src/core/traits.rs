use async_trait::async_trait;

use super::error::LlmError;

/// Something that turns a prompt into generated text.
///
/// Route handlers and other callers should depend on this rather than on
/// [`CompletionClient`](crate::CompletionClient) so they can be tested with a double.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
