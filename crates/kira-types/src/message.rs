//! Chat message type shared between the shell and the conversation history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single chat message, user-authored or assistant-authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID.
    pub id: Uuid,
    /// The message text.
    pub text: String,
    /// `true` when the message was typed or spoken by the user.
    pub is_user: bool,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Backend confidence for assistant responses; `None` for user messages.
    pub confidence: Option<f32>,
}

impl Message {
    /// Creates a user-authored message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_user: true,
            timestamp: Utc::now(),
            confidence: None,
        }
    }

    /// Creates an assistant-authored message with an optional confidence.
    pub fn assistant(text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_user: false,
            timestamp: Utc::now(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_no_confidence() {
        let msg = Message::user("Hello KIRA");
        assert!(msg.is_user);
        assert_eq!(msg.confidence, None);
        assert_eq!(msg.text, "Hello KIRA");
    }

    #[test]
    fn assistant_message_keeps_confidence() {
        let msg = Message::assistant("Hi!", Some(0.95));
        assert!(!msg.is_user);
        assert_eq!(msg.confidence, Some(0.95));
    }

    #[test]
    fn messages_get_distinct_ids() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }
}
