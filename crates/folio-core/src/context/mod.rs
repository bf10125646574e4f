mod turn;
mod store;
mod prompt;

pub use turn::{Role, Turn};
pub use store::ConversationStore;
pub use prompt::{Prompt, PromptBuilder};
