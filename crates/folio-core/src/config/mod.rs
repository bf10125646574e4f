use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{defaults, persona};
use crate::context::PromptBuilder;
use crate::error::{FolioError, Result};
use crate::llm::{GeminiClient, ModelClient};
use crate::session::SessionController;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    pub api_key_env: String,
    pub base_url: Option<String>,
    /// Absent means the call may run forever.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub greeting: String,
    pub system_instruction: Option<String>,
    /// Absent means the whole conversation is resent every turn.
    pub transcript_window: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            greeting: persona::GREETING.to_string(),
            system_instruction: None,
            transcript_window: None,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: defaults::THEME.to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings {
                model: defaults::DEFAULT_MODEL.to_string(),
                api_key_env: defaults::API_KEY_ENV.to_string(),
                base_url: None,
                request_timeout_secs: None,
            },
            chat: ChatSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Settings {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(defaults::CONFIG_DIR)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(defaults::CONFIG_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Falls back to defaults when the file is missing or unparsable.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults")
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults")
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable specified in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env).ok()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.llm.request_timeout_secs.map(Duration::from_secs)
    }

    /// A missing key is not fatal: the request goes out unauthenticated and
    /// the rejection surfaces as the transport fallback.
    pub fn build_model_client(&self) -> ModelClient {
        let api_key = self.api_key().unwrap_or_else(|| {
            tracing::warn!(env = %self.llm.api_key_env, "API key not set");
            String::new()
        });

        let mut backend = GeminiClient::new(api_key).with_model(self.llm.model.clone());
        if let Some(ref url) = self.llm.base_url {
            backend = backend.with_base_url(url.clone());
        }

        ModelClient::new(Box::new(backend)).with_timeout(self.request_timeout())
    }

    pub fn build_prompt_builder(&self) -> PromptBuilder {
        let builder = PromptBuilder::new().with_window(self.chat.transcript_window);
        match self.chat.system_instruction {
            Some(ref instruction) => builder.with_system_instruction(instruction.clone()),
            None => builder,
        }
    }

    /// Start a fresh session wired from these settings.
    pub fn start_session(&self) -> SessionController {
        SessionController::new(self.build_model_client(), self.chat.greeting.clone())
            .with_prompt_builder(self.build_prompt_builder())
    }
}
