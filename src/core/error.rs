use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LlmError {
    /// Missing or invalid credential, model configuration or HTTP setup.
    /// Raised at construction time, before any request is sent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Remote service error: {0}")]
    RemoteService(#[from] RemoteServiceError),
}

impl LlmError {
    pub fn is_remote(&self) -> bool {
        matches!(self, LlmError::RemoteService(_))
    }
}

/// Everything that can go wrong once a request has been handed to the remote service.
#[derive(Error, Debug)]
pub enum RemoteServiceError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("API error ({status_code}): {message}")]
    Api { message: String, status_code: u16 },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxedSource,
    },

    /// The prompt or the candidate was stopped by the service's filters.
    #[error("Response blocked: {reason}")]
    Blocked { reason: String },

    #[error("Response contained no text")]
    MissingText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_errors_convert_into_llm_error() {
        let err: LlmError = RemoteServiceError::Api {
            message: "quota exceeded".to_string(),
            status_code: 429,
        }
        .into();

        assert!(err.is_remote());
        assert_eq!(
            err.to_string(),
            "Remote service error: API error (429): quota exceeded"
        );
    }

    #[test]
    fn configuration_error_displays_reason() {
        let err = LlmError::Configuration("credential is empty".to_string());
        assert!(!err.is_remote());
        assert_eq!(err.to_string(), "Configuration error: credential is empty");
    }
}
