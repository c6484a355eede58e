//! Conversation turn domain types.
//!
//! A `Turn` is one utterance in the recent-history window the client sends
//! with each request: User message in → Assistant reply out. Turns are
//! immutable once created and ordered oldest-first. The service itself never
//! stores turns between requests — the caller owns the window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The learner (or teacher/parent) on the other end of the widget.
    User,
    /// The coach.
    Assistant,
}

/// A single turn in the bounded recent-history window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn ID
    pub id: String,

    /// Who spoke
    pub speaker: Speaker,

    /// The text content
    pub text: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a new user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            speaker: Speaker::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            speaker: Speaker::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_turn() {
        let turn = Turn::user("Hej Aice!");
        assert_eq!(turn.speaker, Speaker::User);
        assert_eq!(turn.text, "Hej Aice!");
        assert!(!turn.id.is_empty());
    }

    #[test]
    fn turn_serialization_roundtrip() {
        let turn = Turn::assistant("Lad os prøve igen.");
        let json = serde_json::to_string(&turn).unwrap();
        let deserialized: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.text, "Lad os prøve igen.");
        assert_eq!(deserialized.speaker, Speaker::Assistant);
    }

    #[test]
    fn speaker_serializes_lowercase() {
        let json = serde_json::to_string(&Speaker::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
