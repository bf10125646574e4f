use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Label used when the turn is rendered into a transcript line.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Model => "Model",
        }
    }
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    role: Role,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// `"<Role>: <text>"`, one transcript line.
    pub fn render(&self) -> String {
        format!("{}: {}", self.role.label(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("Hello");
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.text(), "Hello");

        let model = Turn::model("Hi there");
        assert_eq!(model.role(), Role::Model);
        assert!(model.timestamp() >= user.timestamp());
    }

    #[test]
    fn test_render_uses_distinct_labels() {
        assert_eq!(Turn::user("ping").render(), "User: ping");
        assert_eq!(Turn::model("pong").render(), "Model: pong");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Model).unwrap();
        assert_eq!(json, "\"model\"");
    }
}
