//! Repository for the `records` table.
//!
//! Upserts are keyed by the composite uniqueness constraint on
//! (song_id, level_index): a fresh result for a chart replaces the old
//! best rather than appending a duplicate row.

use futures::stream::BoxStream;
use maipal_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::record::{NewRecord, RecordRow};

const COLUMNS: &str = "id, song_id, level_index, achievements, ds, dx_score, fc, fs, \
                       level, level_label, ra, rate, title, song_type";

const UPSERT: &str = "INSERT INTO records (song_id, level_index, achievements, ds, dx_score, fc, fs,
                                           level, level_label, ra, rate, title, song_type)
                      VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                      ON CONFLICT (song_id, level_index) DO UPDATE SET
                          achievements = excluded.achievements,
                          ds = excluded.ds,
                          dx_score = excluded.dx_score,
                          fc = excluded.fc,
                          fs = excluded.fs,
                          level = excluded.level,
                          level_label = excluded.level_label,
                          ra = excluded.ra,
                          rate = excluded.rate,
                          title = excluded.title,
                          song_type = excluded.song_type";

fn bind_fields<'q>(
    query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    record: &'q NewRecord,
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    query
        .bind(record.song_id)
        .bind(record.level_index)
        .bind(record.achievements)
        .bind(record.ds)
        .bind(record.dx_score)
        .bind(&record.fc)
        .bind(&record.fs)
        .bind(&record.level)
        .bind(&record.level_label)
        .bind(record.ra)
        .bind(&record.rate)
        .bind(&record.title)
        .bind(&record.song_type)
}

/// Provides CRUD + upsert operations for player records.
pub struct RecordRepo;

impl RecordRepo {
    /// Insert or replace a single record for its (song_id, level_index) pair.
    pub async fn upsert(pool: &SqlitePool, record: &NewRecord) -> Result<(), sqlx::Error> {
        bind_fields(sqlx::query(UPSERT), record)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Bulk insert-or-replace, one transaction for the whole batch.
    pub async fn upsert_all(pool: &SqlitePool, records: &[NewRecord]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for record in records {
            bind_fields(sqlx::query(UPSERT), record)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    /// Overwrite an existing row by its surrogate id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        record: &NewRecord,
    ) -> Result<Option<RecordRow>, sqlx::Error> {
        let query = format!(
            "UPDATE records SET
                song_id = ?, level_index = ?, achievements = ?, ds = ?, dx_score = ?,
                fc = ?, fs = ?, level = ?, level_label = ?, ra = ?, rate = ?,
                title = ?, song_type = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecordRow>(&query)
            .bind(record.song_id)
            .bind(record.level_index)
            .bind(record.achievements)
            .bind(record.ds)
            .bind(record.dx_score)
            .bind(&record.fc)
            .bind(&record.fs)
            .bind(&record.level)
            .bind(&record.level_label)
            .bind(record.ra)
            .bind(&record.rate)
            .bind(&record.title)
            .bind(&record.song_type)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete one record by surrogate id. Returns `true` if a row went away.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every record row, returning how many were removed.
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Delete all records for one song.
    pub async fn delete_by_song(pool: &SqlitePool, song_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE song_id = ?")
            .bind(song_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Number of stored records.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM records")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// One-shot snapshot of every record.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<RecordRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records ORDER BY id");
        sqlx::query_as::<_, RecordRow>(&query).fetch_all(pool).await
    }

    /// Push-style sequence of every record, for list screens that render
    /// rows as they arrive instead of waiting for the full snapshot.
    pub fn stream_all(pool: &SqlitePool) -> BoxStream<'_, Result<RecordRow, sqlx::Error>> {
        sqlx::query_as::<_, RecordRow>(
            "SELECT id, song_id, level_index, achievements, ds, dx_score, fc, fs, \
                    level, level_label, ra, rate, title, song_type \
             FROM records ORDER BY id",
        )
        .fetch(pool)
    }

    /// All records for one song (one per played difficulty).
    pub async fn list_by_song(
        pool: &SqlitePool,
        song_id: DbId,
    ) -> Result<Vec<RecordRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE song_id = ? ORDER BY level_index");
        sqlx::query_as::<_, RecordRow>(&query)
            .bind(song_id)
            .fetch_all(pool)
            .await
    }

    /// The record for one (song, difficulty) pair, if any.
    pub async fn find_by_song_and_level(
        pool: &SqlitePool,
        song_id: DbId,
        level_index: i64,
    ) -> Result<Option<RecordRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE song_id = ? AND level_index = ?");
        sqlx::query_as::<_, RecordRow>(&query)
            .bind(song_id)
            .bind(level_index)
            .fetch_optional(pool)
            .await
    }

    /// The top `limit` records by derived rank value, descending.
    /// Backs the "best 50" screen.
    pub async fn top_by_rating(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<RecordRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records ORDER BY ra DESC LIMIT ?");
        sqlx::query_as::<_, RecordRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
