//! Repository for the `charts` table.

use maipal_core::types::DbId;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::models::chart::{ChartRow, NewChart};

const COLUMNS: &str = "id, song_id, difficulty, song_type, ds, level, charter, \
                       notes_tap, notes_hold, notes_slide, notes_touch, notes_break, notes_total";

/// Provides catalog operations for charts.
pub struct ChartRepo;

impl ChartRepo {
    /// Bulk insert charts.
    pub async fn insert_all(pool: &SqlitePool, charts: &[NewChart]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::insert_all_inner(&mut tx, charts).await?;
        tx.commit().await
    }

    pub(crate) async fn insert_all_inner(
        tx: &mut Transaction<'_, Sqlite>,
        charts: &[NewChart],
    ) -> Result<(), sqlx::Error> {
        for chart in charts {
            sqlx::query(
                "INSERT INTO charts (song_id, difficulty, song_type, ds, level, charter,
                                     notes_tap, notes_hold, notes_slide, notes_touch, notes_break, notes_total)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(chart.song_id)
            .bind(chart.difficulty)
            .bind(&chart.song_type)
            .bind(chart.ds)
            .bind(&chart.level)
            .bind(&chart.charter)
            .bind(chart.notes_tap)
            .bind(chart.notes_hold)
            .bind(chart.notes_slide)
            .bind(chart.notes_touch)
            .bind(chart.notes_break)
            .bind(chart.notes_total)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// List the charts belonging to one song.
    pub async fn list_by_song(
        pool: &SqlitePool,
        song_id: DbId,
    ) -> Result<Vec<ChartRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM charts WHERE song_id = ? ORDER BY id");
        sqlx::query_as::<_, ChartRow>(&query)
            .bind(song_id)
            .fetch_all(pool)
            .await
    }

    /// Number of chart rows in the local catalog.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM charts")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Delete every chart row.
    pub async fn clear(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM charts").execute(pool).await?;
        Ok(())
    }
}
