use crate::context::Prompt;
use crate::error::FolioError;

/// One text-in/text-out request to a generative model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub system_instruction: String,
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(system_instruction: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            prompt: prompt.into(),
        }
    }
}

impl From<Prompt> for GenerateRequest {
    fn from(prompt: Prompt) -> Self {
        Self {
            system_instruction: prompt.system_instruction,
            prompt: prompt.text,
        }
    }
}

/// A model backend. Implementations make exactly one network call per
/// `generate` and return the raw reply text, which may be empty.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, FolioError>;

    /// Model name, for status display and logs.
    fn model(&self) -> &str;
}
