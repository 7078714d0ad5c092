pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::{LlmError, RemoteServiceError};
pub use http::{HttpClient, HttpClientConfig};
pub use traits::TextGenerator;
pub use types::{Credential, LanguageModelUsage, ModelConfig};
