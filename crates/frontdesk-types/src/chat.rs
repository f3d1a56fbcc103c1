//! Chat message types for frontdesk.
//!
//! These types model one conversation between a user and the assistant
//! behind the automation webhook: who said what, and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Originator of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "assistant" => Ok(Sender::Assistant),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single message within a conversation.
///
/// Messages are immutable once created and ordered by arrival within
/// their session. The `session_id` ties the message to the persisted
/// conversation identifier sent to the webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub session_id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a user message for the given session.
    pub fn user(session_id: Uuid, content: String) -> Self {
        Self::new(session_id, Sender::User, content)
    }

    /// Build an assistant message for the given session.
    pub fn assistant(session_id: Uuid, content: String) -> Self {
        Self::new(session_id, Sender::Assistant, content)
    }

    fn new(session_id: Uuid, sender: Sender, content: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            session_id,
            sender,
            content,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Assistant] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_serde() {
        let sender = Sender::Assistant;
        let json = serde_json::to_string(&sender).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Sender = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Sender::Assistant);
    }

    #[test]
    fn test_sender_invalid() {
        assert!("bot".parse::<Sender>().is_err());
    }

    #[test]
    fn test_chat_message_constructors() {
        let session_id = Uuid::now_v7();
        let user = ChatMessage::user(session_id, "hi".to_string());
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.session_id, session_id);

        let assistant = ChatMessage::assistant(session_id, "hello".to_string());
        assert_eq!(assistant.sender, Sender::Assistant);
        assert_ne!(user.id, assistant.id);
    }

    #[test]
    fn test_chat_message_serialize() {
        let msg = ChatMessage::user(Uuid::now_v7(), "What are your hours?".to_string());
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"user\""));
        assert!(json.contains("What are your hours?"));
    }
}
