use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model request timed out after {0}s")]
    Timeout(u64),

    #[error("{0}")]
    Other(String),
}

impl FolioError {
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
