//! Repository for the `songs` table, plus the catalog snapshot replace.

use maipal_core::types::DbId;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::models::chart::NewChart;
use crate::models::song::SongRow;
use crate::repositories::chart_repo::ChartRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, artist, genre, bpm, from_version, song_type, is_new, buddy";

/// Provides catalog operations for songs.
pub struct SongRepo;

impl SongRepo {
    /// Bulk replace-insert songs. Conflicting ids are overwritten.
    pub async fn insert_all(pool: &SqlitePool, songs: &[SongRow]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::insert_all_inner(&mut tx, songs).await?;
        tx.commit().await
    }

    pub(crate) async fn insert_all_inner(
        tx: &mut Transaction<'_, Sqlite>,
        songs: &[SongRow],
    ) -> Result<(), sqlx::Error> {
        for song in songs {
            sqlx::query(
                "INSERT INTO songs (id, title, artist, genre, bpm, from_version, song_type, is_new, buddy)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                 ON CONFLICT (id) DO UPDATE SET
                    title = excluded.title,
                    artist = excluded.artist,
                    genre = excluded.genre,
                    bpm = excluded.bpm,
                    from_version = excluded.from_version,
                    song_type = excluded.song_type,
                    is_new = excluded.is_new,
                    buddy = excluded.buddy",
            )
            .bind(song.id)
            .bind(&song.title)
            .bind(&song.artist)
            .bind(&song.genre)
            .bind(song.bpm)
            .bind(&song.from_version)
            .bind(&song.song_type)
            .bind(song.is_new)
            .bind(&song.buddy)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// Replace the whole catalog snapshot in one transaction:
    /// clear songs + charts, then insert the freshly fetched sets.
    pub async fn replace_catalog(
        pool: &SqlitePool,
        songs: &[SongRow],
        charts: &[NewChart],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM charts").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM songs").execute(&mut *tx).await?;

        Self::insert_all_inner(&mut tx, songs).await?;
        ChartRepo::insert_all_inner(&mut tx, charts).await?;

        tx.commit().await?;

        tracing::debug!(
            songs = songs.len(),
            charts = charts.len(),
            "Replaced catalog snapshot",
        );
        Ok(())
    }

    /// List every song in the catalog.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<SongRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs ORDER BY id");
        sqlx::query_as::<_, SongRow>(&query).fetch_all(pool).await
    }

    /// Find a song by its remote id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<SongRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE id = ?");
        sqlx::query_as::<_, SongRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of songs in the local catalog.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM songs")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Delete every song row.
    pub async fn clear(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM songs").execute(pool).await?;
        Ok(())
    }
}
