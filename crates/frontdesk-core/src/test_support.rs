//! In-memory test doubles for the storage and transport ports.

use std::collections::HashMap;
use std::sync::Mutex;

use frontdesk_types::error::StoreError;
use uuid::Uuid;

use crate::storage::kv_store::KvStore;
use crate::transport::ChatTransport;

/// In-memory `KvStore` for tests; `failing()` simulates an unavailable store.
pub(crate) struct MemoryKvStore {
    entries: Mutex<HashMap<String, serde_json::Value>>,
    fail: bool,
}

impl MemoryKvStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail: true,
        }
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// `ChatTransport` double returning a canned reply and recording each call.
pub(crate) struct RecordingTransport {
    reply: String,
    calls: Mutex<Vec<(Uuid, String)>>,
}

impl RecordingTransport {
    pub(crate) fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(Uuid, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatTransport for RecordingTransport {
    async fn send(&self, session_id: &Uuid, text: &str) -> String {
        self.calls
            .lock()
            .unwrap()
            .push((*session_id, text.to_string()));
        self.reply.clone()
    }
}
