//! Conversation history owned by the shell.

use kira_types::Message;

/// The greeting seeded once the assistant comes up.
const WELCOME_TEXT: &str = "Hello! I'm KIRA, your AI voice assistant. \
Say 'Hey KIRA' or click the microphone to start our conversation.";

/// Ordered chat transcript. In-memory only; nothing persists across
/// sessions.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the assistant's welcome message.
    pub fn push_welcome(&mut self) {
        self.messages.push(Message::assistant(WELCOME_TEXT, Some(1.0)));
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Text of the most recent message, or the empty string. This is what
    /// feeds the emotion classifier.
    pub fn latest_text(&self) -> &str {
        self.messages.last().map(|m| m.text.as_str()).unwrap_or("")
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
