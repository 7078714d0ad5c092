//! # code-review
//!
//! Send a code snippet to Google Gemini under a fixed code-review persona and get the
//! generated review back as text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use code_review::{CompletionClient, Credential, ModelConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = Credential::from_env()?;
//!     let client = CompletionClient::new(credential, ModelConfig::code_review())?;
//!
//!     let review = client.generate("function add(a,b){return a+b}").await?;
//!     println!("{review}");
//!     Ok(())
//! }
//! ```
//!
//! The client does not retry, time out or validate the prompt. Wrap calls in
//! `tokio::time::timeout` if bounded latency is needed.

pub mod completions;
pub mod core;
pub mod provider;
pub mod review;

pub use completions::CompletionClient;
pub use core::{
    Credential, HttpClientConfig, LanguageModelUsage, LlmError, ModelConfig, RemoteServiceError,
    TextGenerator,
};
pub use provider::{GeminiConfig, Provider};
pub use review::{CODE_REVIEW_INSTRUCTION, review_prompt};
