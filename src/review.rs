//! The code-review persona: a fixed system instruction and the model it runs on.

use crate::core::{LlmError, ModelConfig};
use crate::provider::Provider;

/// System instruction sent with every review request.
pub const CODE_REVIEW_INSTRUCTION: &str = include_str!("review/system_instruction.md");

impl ModelConfig {
    /// Code-review persona on the default Gemini model.
    ///
    /// default model: `gemini-2.0-flash`
    pub fn code_review() -> Self {
        Self {
            model: Provider::Gemini.default_model().to_string(),
            system_instruction: CODE_REVIEW_INSTRUCTION.to_string(),
        }
    }

    /// Code-review persona on a different model.
    pub fn code_review_with_model(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(model, CODE_REVIEW_INSTRUCTION)
    }
}

/// Build the text sent for review: the snippet, optionally preceded by a note
/// from the user (e.g. "focus on error handling").
pub fn review_prompt(code: &str, note: Option<&str>) -> String {
    match note.map(str::trim).filter(|note| !note.is_empty()) {
        Some(note) => format!("{note}\n\n{code}"),
        None => code.to_string(),
    }
}
