//! SQLite-backed local cache for the maipal companion client.
//!
//! Holds the mirrored song catalog, the player's best records, the single
//! user profile, and a small string key-value table used for staleness
//! markers, raw payload blobs, and session identity.

pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use repositories::{ChartRepo, KvStore, RecordRepo, SongRepo, SongSearchRepo, UserRepo};

/// Database connection pool alias used across the workspace.
pub type DbPool = sqlx::SqlitePool;

/// Embedded schema migrations, applied on [`connect`].
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Maximum pool size. A single-user client never needs more.
const MAX_CONNECTIONS: u32 = 5;

/// Open (creating if missing) the local database and apply migrations.
pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    tracing::debug!(url = database_url, "Local database ready");
    Ok(pool)
}

/// Cheap connectivity probe.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
