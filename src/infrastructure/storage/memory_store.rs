//! In-memory `StateStore` used by tests and as a last-resort fallback.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::errors::StorageError;
use crate::domain::ports::StateStore;

/// Process-local key/value store with optional save-failure injection so
/// tests can exercise the failed-save-is-a-no-op contract.
#[derive(Default)]
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, Value>>,
    fail_saves: AtomicBool,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail, simulating a full or broken store.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Seed a raw value, bypassing the save path.
    pub async fn seed(&self, key: &str, value: Value) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::QueryFailed("injected save failure".to_string()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.entries.write().await.clear();
        Ok(())
    }
}
