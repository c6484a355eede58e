//! Role-tagged messages and the assembled instruction set.
//!
//! `ChatMessage` is the wire shape sent to the completion endpoint: an
//! ordered, role-tagged piece of the prompt. `InstructionSet` is the full
//! ordered sequence built fresh for one request — system directives first,
//! worked examples, the recent-history window, and the live user turn last.

use serde::{Deserialize, Serialize};

use crate::turn::{Speaker, Turn};

/// The role of a message in the instruction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System-level directive (identity, rules, framing)
    System,
    /// The end user
    User,
    /// The coach
    Assistant,
}

/// One ordered, role-tagged message in the instruction set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        match turn.speaker {
            Speaker::User => Self::user(&turn.text),
            Speaker::Assistant => Self::assistant(&turn.text),
        }
    }
}

/// The ordered instruction sequence for one completion call.
///
/// Ordering is load-bearing: later messages take precedence over earlier
/// generic ones when the model resolves conflicts, so turn-specific
/// directives precede the worked examples and the live user message is
/// always last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstructionSet {
    pub messages: Vec<ChatMessage>,
}

impl InstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, preserving assembly order.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consume the set, yielding the ordered messages for the API call.
    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }

    /// Rough token estimate (4 chars ≈ 1 token).
    pub fn estimated_tokens(&self) -> usize {
        self.messages.iter().map(|m| m.content.len() / 4).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatRole::System).unwrap();
        assert_eq!(json, "\"system\"");
    }

    #[test]
    fn turn_converts_by_speaker() {
        let user: ChatMessage = (&Turn::user("hello")).into();
        assert_eq!(user.role, ChatRole::User);

        let coach: ChatMessage = (&Turn::assistant("hi there")).into();
        assert_eq!(coach.role, ChatRole::Assistant);
    }

    #[test]
    fn instruction_set_preserves_order() {
        let mut set = InstructionSet::new();
        set.push(ChatMessage::system("rules"));
        set.push(ChatMessage::user("question"));
        assert_eq!(set.len(), 2);

        let messages = set.into_messages();
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
    }

    #[test]
    fn token_estimate() {
        let mut set = InstructionSet::new();
        // 20 chars ≈ 5 tokens
        set.push(ChatMessage::user("12345678901234567890"));
        assert_eq!(set.estimated_tokens(), 5);
    }
}
