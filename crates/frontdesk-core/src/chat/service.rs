//! Chat service orchestrating the conversation lifecycle.
//!
//! `ChatService` is the single owner of the application state: the
//! conversation, the session identifier, and the transport. It implements
//! the per-submission turn (Idle -> Sending -> Idle) and mirrors appended
//! messages into the persisted history log.

use frontdesk_types::chat::ChatMessage;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::conversation::Conversation;
use crate::chat::session::{HISTORY_KEY, SessionService};
use crate::storage::kv_store::KvStore;
use crate::transport::ChatTransport;

/// Result of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input was empty or whitespace-only; nothing was appended and no
    /// transport call was made.
    Empty,
    /// A request is already in flight; the submission was dropped.
    Busy,
    /// The turn completed and the assistant message (reply or fallback)
    /// was appended.
    Replied(ChatMessage),
}

/// Orchestrates chat turns against the transport and the persisted state.
///
/// Generic over `ChatTransport` and `KvStore` to maintain clean
/// architecture (frontdesk-core never depends on frontdesk-infra).
pub struct ChatService<T: ChatTransport, K: KvStore> {
    transport: T,
    sessions: SessionService<K>,
    conversation: Conversation,
    welcome_text: String,
}

impl<T: ChatTransport, K: KvStore> ChatService<T, K> {
    /// Restore or create the session and seed the conversation with the
    /// welcome message.
    pub async fn start(transport: T, store: K, welcome_text: String) -> Self {
        let sessions = SessionService::new(store);
        let session_id = sessions.get_or_create().await;
        let conversation = Conversation::new(session_id, &welcome_text);
        Self {
            transport,
            sessions,
            conversation,
            welcome_text,
        }
    }

    /// The current conversation.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The current session identifier.
    pub fn session_id(&self) -> Uuid {
        self.conversation.session_id()
    }

    /// Submit one user turn.
    ///
    /// Appends the user message, performs the transport call, and appends
    /// the assistant message. The awaiting-reply flag is cleared
    /// unconditionally; the transport absorbs its own failures, so every
    /// accepted submission yields exactly one assistant message.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        if !self.conversation.begin_turn() {
            return SubmitOutcome::Busy;
        }

        let user = self.conversation.append_user(text.to_string()).clone();
        self.persist_message(&user).await;

        let reply = self.transport.send(&self.conversation.session_id(), text).await;

        let assistant = self.conversation.append_assistant(reply).clone();
        self.persist_message(&assistant).await;
        self.conversation.finish_turn();

        SubmitOutcome::Replied(assistant)
    }

    /// Start a new session: new identifier, persisted history cleared,
    /// conversation reseeded with the welcome message.
    pub async fn reset(&mut self) -> Uuid {
        let new_id = self.sessions.reset().await;
        self.conversation.reset(new_id, &self.welcome_text);
        info!(session_id = %new_id, "Session reset");
        new_id
    }

    /// Mirror a message into the persisted history log.
    ///
    /// The in-memory conversation is authoritative; persistence failures
    /// degrade to a warning.
    async fn persist_message(&self, message: &ChatMessage) {
        let store = self.sessions.store();
        let mut history = match store.get(HISTORY_KEY).await {
            Ok(Some(serde_json::Value::Array(items))) => items,
            Ok(_) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "history store unavailable, message not persisted");
                return;
            }
        };

        match serde_json::to_value(message) {
            Ok(value) => history.push(value),
            Err(err) => {
                warn!(error = %err, "failed to serialize message for history");
                return;
            }
        }

        if let Err(err) = store.set(HISTORY_KEY, &serde_json::Value::Array(history)).await {
            warn!(error = %err, "failed to persist history");
        }
    }
}
