//! String key-value store over the `kv_store` table.
//!
//! Holds staleness markers, raw payload blobs, and the current-session
//! identity. Serializes through SQLite's own transaction discipline; I/O
//! errors propagate to the caller, no retry.

use sqlx::SqlitePool;

/// Provides small string-keyed persistent storage.
pub struct KvStore;

impl KvStore {
    /// Store `value` under `key`, overwriting any previous value.
    pub async fn put(pool: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?, ?)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Read the value under `key`, `None` when absent.
    pub async fn get(pool: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    /// Remove the entry under `key`, if any.
    pub async fn remove(pool: &SqlitePool, key: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove every entry.
    pub async fn clear(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM kv_store").execute(pool).await?;
        Ok(())
    }

    /// Whether an entry exists under `key`.
    pub async fn contains_key(pool: &SqlitePool, key: &str) -> Result<bool, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_one(pool)
            .await?;
        Ok(row.0 > 0)
    }
}
