pub mod error;
pub mod constants;
pub mod llm;
pub mod context;
pub mod session;
pub mod config;
pub mod portfolio;

// Re-export key types
pub use error::FolioError;
pub use llm::{DegradeReason, GeminiClient, GenerateRequest, LlmClient, ModelClient, Outcome};
pub use context::{ConversationStore, Prompt, PromptBuilder, Role, Turn};
pub use session::{PendingTurn, RejectReason, SessionController, SessionEvent, SessionState, Submission};
pub use config::Settings;
pub use portfolio::{Project, Section};
