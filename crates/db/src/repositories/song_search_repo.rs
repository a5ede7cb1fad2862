//! Combined song + charts catalog search.

use std::collections::HashMap;

use maipal_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::chart::ChartRow;
use crate::models::search::{SongSearchFilter, SongWithCharts};
use crate::models::song::SongRow;

/// Song filter: every predicate defaults to "unrestricted" when absent, so
/// a NULL or empty bind must never exclude rows. The ds-range predicate asks
/// whether the song has at least one chart inside the inclusive range.
const SEARCH_SQL: &str = "\
    SELECT id, title, artist, genre, bpm, from_version, song_type, is_new, buddy
    FROM songs
    WHERE (?1 IS NULL OR ?1 = '' OR title LIKE '%' || ?1 || '%')
      AND (
            (?2 IS NULL AND ?3 IS NULL)
            OR EXISTS (
                SELECT 1 FROM charts
                WHERE charts.song_id = songs.id
                  AND (?2 IS NULL OR charts.ds >= ?2)
                  AND (?3 IS NULL OR charts.ds <= ?3)
            )
      )
      AND (?4 IS NULL OR ?4 = '' OR from_version = ?4)
    ORDER BY id";

/// Read-side search over the catalog tables.
pub struct SongSearchRepo;

impl SongSearchRepo {
    /// Search songs by the given filter and hydrate each hit with all of
    /// its charts (charts outside the ds range are still included -- the
    /// range only selects songs).
    pub async fn search(
        pool: &SqlitePool,
        filter: &SongSearchFilter,
    ) -> Result<Vec<SongWithCharts>, sqlx::Error> {
        let songs: Vec<SongRow> = sqlx::query_as(SEARCH_SQL)
            .bind(&filter.title)
            .bind(filter.min_ds)
            .bind(filter.max_ds)
            .bind(&filter.version)
            .fetch_all(pool)
            .await?;

        if songs.is_empty() {
            return Ok(Vec::new());
        }

        let mut charts_by_song = Self::charts_for(pool, &songs).await?;

        Ok(songs
            .into_iter()
            .map(|song| {
                let charts = charts_by_song.remove(&song.id).unwrap_or_default();
                SongWithCharts { song, charts }
            })
            .collect())
    }

    async fn charts_for(
        pool: &SqlitePool,
        songs: &[SongRow],
    ) -> Result<HashMap<DbId, Vec<ChartRow>>, sqlx::Error> {
        let placeholders = vec!["?"; songs.len()].join(", ");
        let query = format!(
            "SELECT id, song_id, difficulty, song_type, ds, level, charter,
                    notes_tap, notes_hold, notes_slide, notes_touch, notes_break, notes_total
             FROM charts WHERE song_id IN ({placeholders}) ORDER BY id"
        );

        let mut q = sqlx::query_as::<_, ChartRow>(&query);
        for song in songs {
            q = q.bind(song.id);
        }
        let rows = q.fetch_all(pool).await?;

        let mut by_song: HashMap<DbId, Vec<ChartRow>> = HashMap::new();
        for row in rows {
            by_song.entry(row.song_id).or_default().push(row);
        }
        Ok(by_song)
    }
}
