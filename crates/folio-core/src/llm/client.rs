use std::time::Duration;

use crate::constants::fallback;
use crate::context::Prompt;
use crate::error::FolioError;
use crate::llm::traits::{GenerateRequest, LlmClient};

/// Why a model call did not produce a real answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// Network, credential, or API-level failure. Carries the error text.
    Transport(String),
    /// The service answered with no text.
    Empty,
    /// The configured timeout elapsed and the call was dropped.
    Timeout,
}

impl DegradeReason {
    pub fn fallback_text(&self) -> &'static str {
        match self {
            DegradeReason::Transport(_) => fallback::TRANSPORT,
            DegradeReason::Empty => fallback::EMPTY,
            DegradeReason::Timeout => fallback::TIMEOUT,
        }
    }
}

/// Result of one model invocation. Both variants carry renderable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok(String),
    Degraded {
        reason: DegradeReason,
        fallback: String,
    },
}

impl Outcome {
    pub fn degraded(reason: DegradeReason) -> Self {
        let fallback = reason.fallback_text().to_string();
        Outcome::Degraded { reason, fallback }
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Ok(text) => text,
            Outcome::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Outcome::Ok(text) => text,
            Outcome::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }
}

/// The I/O boundary of a session.
///
/// Every backend error stops here: callers always get an `Outcome` whose
/// text can be shown to the user. Failures are logged, never returned.
pub struct ModelClient {
    backend: Box<dyn LlmClient>,
    timeout: Option<Duration>,
}

impl ModelClient {
    pub fn new(backend: Box<dyn LlmClient>) -> Self {
        Self {
            backend,
            timeout: None,
        }
    }

    /// Drop the in-flight call after `timeout` and degrade to the timeout
    /// fallback. Off by default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn model(&self) -> &str {
        self.backend.model()
    }

    pub async fn generate(
        &self,
        system_instruction: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Outcome {
        let request = GenerateRequest::new(system_instruction, prompt);
        self.generate_request(&request).await
    }

    pub async fn generate_prompt(&self, prompt: Prompt) -> Outcome {
        self.generate_request(&GenerateRequest::from(prompt)).await
    }

    async fn generate_request(&self, request: &GenerateRequest) -> Outcome {
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.backend.generate(request)).await
            {
                Ok(result) => result,
                Err(_) => Err(FolioError::Timeout(limit.as_secs())),
            },
            None => self.backend.generate(request).await,
        };

        match result {
            Ok(text) if text.is_empty() => {
                tracing::error!(model = %self.model(), "model returned an empty response");
                Outcome::degraded(DegradeReason::Empty)
            }
            Ok(text) => Outcome::Ok(text),
            Err(FolioError::Timeout(secs)) => {
                tracing::error!(model = %self.model(), secs, "model request timed out");
                Outcome::degraded(DegradeReason::Timeout)
            }
            Err(e) => {
                tracing::error!(model = %self.model(), error = %e, "model request failed");
                Outcome::degraded(DegradeReason::Transport(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_are_distinct() {
        let transport = Outcome::degraded(DegradeReason::Transport("boom".into()));
        let empty = Outcome::degraded(DegradeReason::Empty);
        let timeout = Outcome::degraded(DegradeReason::Timeout);

        assert_eq!(transport.text(), fallback::TRANSPORT);
        assert_eq!(empty.text(), fallback::EMPTY);
        assert_eq!(timeout.text(), fallback::TIMEOUT);
        assert_ne!(transport.text(), empty.text());
        assert_ne!(timeout.text(), transport.text());
    }

    #[test]
    fn test_ok_outcome_text() {
        let outcome = Outcome::Ok("answer".into());
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.into_text(), "answer");
    }
}
