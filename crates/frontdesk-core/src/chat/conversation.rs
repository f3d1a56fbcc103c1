//! In-memory conversation store.
//!
//! Holds the ordered, append-only message sequence for one session plus the
//! transient awaiting-reply flag. Exactly one mutator exists (the chat
//! service), so no locking is needed.

use frontdesk_types::chat::ChatMessage;
use uuid::Uuid;

/// Ordered, append-only sequence of chat turns scoped to one session.
///
/// A fresh conversation is seeded with one synthetic welcome message from
/// the assistant. Messages are never edited or removed; `reset` discards
/// the whole sequence and reseeds it under a new session identifier.
pub struct Conversation {
    session_id: Uuid,
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl Conversation {
    /// Create a conversation for the session, seeded with the welcome message.
    pub fn new(session_id: Uuid, welcome_text: &str) -> Self {
        let mut conversation = Self {
            session_id,
            messages: Vec::new(),
            awaiting_reply: false,
        };
        conversation.seed_welcome(welcome_text);
        conversation
    }

    /// The session this conversation belongs to.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// All messages in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a transport call is currently in flight.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Mark a turn as in flight.
    ///
    /// Returns false when a turn is already pending; at most one request may
    /// be outstanding at a time.
    pub fn begin_turn(&mut self) -> bool {
        if self.awaiting_reply {
            return false;
        }
        self.awaiting_reply = true;
        true
    }

    /// Clear the in-flight flag. Called whether the turn succeeded or failed.
    pub fn finish_turn(&mut self) {
        self.awaiting_reply = false;
    }

    /// Append a user message and return a reference to it.
    pub fn append_user(&mut self, content: String) -> &ChatMessage {
        self.messages
            .push(ChatMessage::user(self.session_id, content));
        self.messages.last().expect("message just pushed")
    }

    /// Append an assistant message and return a reference to it.
    pub fn append_assistant(&mut self, content: String) -> &ChatMessage {
        self.messages
            .push(ChatMessage::assistant(self.session_id, content));
        self.messages.last().expect("message just pushed")
    }

    /// Discard all messages and reseed with a fresh welcome message under
    /// the new session identifier.
    pub fn reset(&mut self, new_session_id: Uuid, welcome_text: &str) {
        self.session_id = new_session_id;
        self.messages.clear();
        self.awaiting_reply = false;
        self.seed_welcome(welcome_text);
    }

    fn seed_welcome(&mut self, welcome_text: &str) {
        self.messages.push(ChatMessage::assistant(
            self.session_id,
            welcome_text.to_string(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_types::chat::Sender;

    const WELCOME: &str = "Hello! What can I help you with today?";

    #[test]
    fn test_new_seeds_welcome() {
        let session_id = Uuid::now_v7();
        let conversation = Conversation::new(session_id, WELCOME);

        assert_eq!(conversation.messages().len(), 1);
        let welcome = &conversation.messages()[0];
        assert_eq!(welcome.sender, Sender::Assistant);
        assert_eq!(welcome.content, WELCOME);
        assert_eq!(welcome.session_id, session_id);
        assert!(!conversation.awaiting_reply());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut conversation = Conversation::new(Uuid::now_v7(), WELCOME);
        conversation.append_user("What are your hours?".to_string());
        conversation.append_assistant("We are open 9-5.".to_string());

        let senders: Vec<Sender> = conversation.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
        assert_eq!(conversation.messages()[1].content, "What are your hours?");
        assert_eq!(conversation.messages()[2].content, "We are open 9-5.");
    }

    #[test]
    fn test_begin_turn_rejects_second_turn() {
        let mut conversation = Conversation::new(Uuid::now_v7(), WELCOME);

        assert!(conversation.begin_turn());
        assert!(conversation.awaiting_reply());
        // Second submission while a request is in flight is refused.
        assert!(!conversation.begin_turn());

        conversation.finish_turn();
        assert!(!conversation.awaiting_reply());
        assert!(conversation.begin_turn());
    }

    #[test]
    fn test_reset_reseeds_single_welcome() {
        let first_id = Uuid::now_v7();
        let mut conversation = Conversation::new(first_id, WELCOME);
        conversation.append_user("hi".to_string());
        conversation.append_assistant("hello".to_string());
        let _ = conversation.begin_turn();

        let second_id = Uuid::now_v7();
        conversation.reset(second_id, WELCOME);

        assert_eq!(conversation.session_id(), second_id);
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].sender, Sender::Assistant);
        assert_eq!(conversation.messages()[0].session_id, second_id);
        assert!(!conversation.awaiting_reply());
    }
}
