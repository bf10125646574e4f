use super::turn::{Role, Turn};
use crate::constants::persona;

/// Ordered, append-only list of turns for one session.
///
/// Seeded with a single greeting turn from the model. There is no removal
/// and no mutation of existing turns.
///
/// A blank greeting is replaced by the default persona greeting.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    turns: Vec<Turn>,
}

impl ConversationStore {
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut greeting = greeting.into();
        if greeting.trim().is_empty() {
            tracing::warn!("blank greeting, using the default");
            greeting = persona::GREETING.to_string();
        }
        Self {
            turns: vec![Turn::model(greeting)],
        }
    }

    /// Adds a turn to the end. Turns with empty text are refused.
    pub fn append(&mut self, turn: Turn) -> bool {
        if turn.text().is_empty() {
            tracing::warn!(role = ?turn.role(), "refusing to append empty turn");
            return false;
        }
        self.turns.push(turn);
        true
    }

    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn count(&self, role: Role) -> usize {
        self.turns.iter().filter(|t| t.role() == role).count()
    }
}
