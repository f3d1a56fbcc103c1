//! Transport port for frontdesk.
//!
//! The transport adapter turns one user turn into an external request and
//! the external response into displayable assistant text. Implementations
//! live in frontdesk-infra (e.g., `WebhookClient`).

use uuid::Uuid;

/// Trait for delivering one user turn to the conversational backend.
///
/// Implementations absorb all transport failures internally and return
/// fallback text instead of an error, so the caller always has a
/// displayable assistant message. Uses RPITIT like the storage traits.
pub trait ChatTransport: Send + Sync {
    /// Deliver `text` for the given session and return the assistant reply.
    fn send(
        &self,
        session_id: &Uuid,
        text: &str,
    ) -> impl std::future::Future<Output = String> + Send;
}
