use async_trait::async_trait;
use serde_json::Value;

use super::errors::{OracleError, StorageError};
use super::models::CompletionRequest;

/// Durable string-keyed JSON store.
///
/// This is the persistence port the state service writes through on every
/// entity change. Implementations must treat keys as opaque and values as
/// already-serialized JSON; they never interpret entity shapes.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the value stored under `key`.
    ///
    /// # Returns
    /// * `Ok(Some(value))` if present and parseable
    /// * `Ok(None)` if absent
    /// * `Err(StorageError)` on query failure or corrupt stored text
    async fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every stored value.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// External generative-AI completion service, treated as an opaque
/// request/response oracle.
///
/// One request is outstanding per chat transcript at most; callers issue no
/// retries of their own - a failed request surfaces to the user, who decides
/// whether to try again.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Run one completion and return the raw response text.
    ///
    /// When the request declares a response schema, the returned text is the
    /// JSON document the caller parses and validates; parsing failures are
    /// the caller's `OracleError::MalformedResponse`.
    async fn complete(&self, request: CompletionRequest) -> Result<String, OracleError>;
}
