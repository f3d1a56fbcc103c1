//! Session identifier management.
//!
//! The session identifier correlates all turns of one user's conversation
//! with the webhook backend. It is persisted in the key-value store across
//! invocations and replaced on explicit reset.

use frontdesk_types::error::StoreError;
use tracing::warn;
use uuid::Uuid;

use crate::storage::kv_store::KvStore;

/// Store key holding the persisted session identifier.
pub const SESSION_KEY: &str = "session_id";

/// Store key holding the persisted conversation history.
pub const HISTORY_KEY: &str = "chat_history";

/// Manages the persisted session identifier.
///
/// Generic over `KvStore` so tests can run against an in-memory store.
/// Store failures never surface to the caller: when the store is
/// unavailable, the identifier degrades to session-local (non-persisted)
/// for this run.
pub struct SessionService<K: KvStore> {
    store: K,
}

impl<K: KvStore> SessionService<K> {
    /// Create a session service backed by the given store.
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Read the persisted session identifier, creating and persisting a
    /// fresh one if absent.
    ///
    /// A malformed persisted value is treated as absent. When the store is
    /// unavailable the returned identifier is not persisted.
    pub async fn get_or_create(&self) -> Uuid {
        match self.store.get(SESSION_KEY).await {
            Ok(Some(value)) => {
                if let Some(id) = value.as_str().and_then(|s| Uuid::parse_str(s).ok()) {
                    return id;
                }
                warn!("persisted session identifier is malformed, replacing it");
                self.create_and_persist().await
            }
            Ok(None) => self.create_and_persist().await,
            Err(err) => {
                warn!(error = %err, "session store unavailable, using session-local identifier");
                Uuid::now_v7()
            }
        }
    }

    /// Generate and persist a new session identifier and clear the persisted
    /// conversation history.
    ///
    /// Always returns the new identifier, even when persistence fails.
    pub async fn reset(&self) -> Uuid {
        let id = Uuid::now_v7();
        if let Err(err) = self.persist(&id).await {
            warn!(error = %err, "failed to persist new session identifier");
        }
        if let Err(err) = self.store.delete(HISTORY_KEY).await {
            warn!(error = %err, "failed to clear persisted history");
        }
        id
    }

    async fn create_and_persist(&self) -> Uuid {
        let id = Uuid::now_v7();
        if let Err(err) = self.persist(&id).await {
            warn!(error = %err, "failed to persist session identifier");
        }
        id
    }

    async fn persist(&self, id: &Uuid) -> Result<(), StoreError> {
        self.store
            .set(SESSION_KEY, &serde_json::Value::String(id.to_string()))
            .await
    }
}
