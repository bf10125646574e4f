use super::store::ConversationStore;
use super::turn::{Role, Turn};
use crate::constants::persona;

/// The single request payload sent to the model for one user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub text: String,
}

/// Flattens a conversation into one transcript string.
///
/// The model side keeps no session, so every request resends the history.
/// Each prior turn becomes a `"<Role>: <text>"` line, followed by the new
/// user text as the final `User:` line.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_instruction: String,
    window: Option<usize>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            system_instruction: persona::SYSTEM_INSTRUCTION.to_string(),
            window: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// Keep only the last `turns` prior turns in the transcript.
    /// Without a window the transcript grows with the conversation.
    pub fn with_window(mut self, turns: Option<usize>) -> Self {
        self.window = turns;
        self
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn window(&self) -> Option<usize> {
        self.window
    }

    pub fn build(&self, prior: &[Turn], new_text: &str) -> Prompt {
        let start = match self.window {
            Some(n) => prior.len().saturating_sub(n),
            None => 0,
        };

        let mut lines: Vec<String> = prior[start..].iter().map(Turn::render).collect();
        lines.push(format!("{}: {}", Role::User.label(), new_text));

        Prompt {
            system_instruction: self.system_instruction.clone(),
            text: lines.join("\n"),
        }
    }

    /// Builds from a store whose last turn is the user turn just appended,
    /// so that text appears exactly once.
    pub fn build_from_store(&self, store: &ConversationStore) -> Prompt {
        match store.all().split_last() {
            Some((latest, prior)) if latest.role() == Role::User => {
                self.build(prior, latest.text())
            }
            _ => Prompt {
                system_instruction: self.system_instruction.clone(),
                text: store
                    .all()
                    .iter()
                    .map(Turn::render)
                    .collect::<Vec<_>>()
                    .join("\n"),
            },
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
