//! Key-value store trait.
//!
//! Defines the interface for client-local persisted state: the session
//! identifier and the chat history log. Implementations live in
//! frontdesk-infra.

use frontdesk_types::error::StoreError;

/// Trait for client-local key-value persistent storage.
///
/// Stores arbitrary JSON values keyed by string key.
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in frontdesk-infra.
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Delete a key. No-op if key does not exist.
    fn delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
