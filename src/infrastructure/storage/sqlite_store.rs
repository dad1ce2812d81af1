//! SQLite implementation of the `StateStore` port.
//!
//! One row per storage key; values are JSON text. Upserts keep the store
//! reflecting the latest in-memory value after every successful write.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::domain::errors::StorageError;
use crate::domain::ports::StateStore;

#[derive(Clone)]
pub struct SqliteStateStore {
    pool: SqlitePool,
}

impl SqliteStateStore {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StateStore for SqliteStateStore {
    async fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM state WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some((text,)) => {
                let value =
                    serde_json::from_str(&text).map_err(|err| StorageError::CorruptValue {
                        key: key.to_string(),
                        reason: err.to_string(),
                    })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        let text = value.to_string();
        sqlx::query(
            r"INSERT INTO state (key, value, updated_at) VALUES (?, ?, ?)
              ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(text)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM state WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM state").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::connection::create_test_pool;
    use serde_json::json;

    async fn store() -> SqliteStateStore {
        SqliteStateStore::new(create_test_pool().await.expect("failed to create pool"))
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let store = store().await;
        let value = json!({"question": "¿Cómo estás?", "score": 4});
        store.save("synk-baseline-checkin", &value).await.unwrap();

        let loaded = store.load("synk-baseline-checkin").await.unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[tokio::test]
    async fn test_load_absent_key() {
        let store = store().await;
        assert_eq!(store.load("synk-nickname").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = store().await;
        store.save("synk-consent", &json!(false)).await.unwrap();
        store.save("synk-consent", &json!(true)).await.unwrap();
        assert_eq!(store.load("synk-consent").await.unwrap(), Some(json!(true)));
    }

    #[tokio::test]
    async fn test_corrupt_value_is_reported() {
        let store = store().await;
        sqlx::query("INSERT INTO state (key, value, updated_at) VALUES (?, ?, ?)")
            .bind("synk-diagnosis")
            .bind("{not json")
            .bind(Utc::now().to_rfc3339())
            .execute(&store.pool)
            .await
            .unwrap();

        let result = store.load("synk-diagnosis").await;
        assert!(matches!(result, Err(StorageError::CorruptValue { .. })));
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = store().await;
        store.save("a", &json!(1)).await.unwrap();
        store.save("b", &json!(2)).await.unwrap();

        store.remove("a").await.unwrap();
        assert_eq!(store.load("a").await.unwrap(), None);

        store.clear().await.unwrap();
        assert_eq!(store.load("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_not_an_error() {
        let store = store().await;
        assert!(store.remove("missing").await.is_ok());
    }
}
