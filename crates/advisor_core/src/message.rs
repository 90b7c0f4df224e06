//! Message - conversation transcript entries
//!
//! A message is immutable once created; the conversation log only appends.

use serde::{Deserialize, Serialize};

/// Greeting seeded into every new conversation before any user interaction.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI Academic Advisor, and I'm here to help you \
with questions about OSU's CSE curriculum. I can provide detailed information about courses, \
prerequisites, and program requirements. What would you like to know?";

/// Who authored a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation transcript.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// The fixed greeting shown at the start of every conversation.
    pub fn welcome() -> Self {
        Self::assistant(WELCOME_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");

        let msg = Message::assistant("hi there");
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::user("x")).unwrap();
        assert!(json.contains(r#""role":"user""#));

        let json = serde_json::to_string(&Message::welcome()).unwrap();
        assert!(json.contains(r#""role":"assistant""#));
    }

    #[test]
    fn test_welcome_is_assistant() {
        let msg = Message::welcome();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, WELCOME_MESSAGE);
    }
}
