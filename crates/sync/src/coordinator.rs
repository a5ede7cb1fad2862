//! Staleness tracking and refresh orchestration.

use sqlx::SqlitePool;

use maipal_db::{ChartRepo, KvStore, RecordRepo, SongRepo};

use crate::error::SyncError;
use crate::keys;
use crate::mapping;
use crate::source::ScoreSource;

/// The two independently synchronized data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncCategory {
    Catalog,
    PlayerRecords,
}

impl SyncCategory {
    /// KV key holding the date of the last successful fetch.
    pub fn marker_key(self) -> &'static str {
        match self {
            SyncCategory::Catalog => keys::LAST_SONG_UPDATE_DATE,
            SyncCategory::PlayerRecords => keys::LAST_PLAYER_RECORD_UPDATE_DATE,
        }
    }

    /// KV key holding the raw cached payload.
    pub fn payload_key(self) -> &'static str {
        match self {
            SyncCategory::Catalog => keys::SONG_DATA,
            SyncCategory::PlayerRecords => keys::PLAYER_RECORD_DATA,
        }
    }
}

/// Freshness of a category's local copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No successful fetch has ever completed.
    NeverSynced,
    /// Fetched today and the payload is present.
    UpToDate,
    /// The marker is from an earlier day, or the payload went missing.
    Stale,
}

/// Decides when to refetch and applies fetched payloads to both local
/// copies (raw KV blob and relational projection).
///
/// The date marker only advances after the fetch and the raw-payload
/// write both succeed. A failed projection into the relational tables
/// is logged and tolerated; [`SyncCoordinator::resync_local_records`]
/// can rebuild the projection from the cached payload later.
pub struct SyncCoordinator<S: ScoreSource> {
    pool: SqlitePool,
    source: S,
}

impl<S: ScoreSource> SyncCoordinator<S> {
    pub fn new(pool: SqlitePool, source: S) -> Self {
        Self { pool, source }
    }

    /// Freshness of `category`'s local copy.
    pub async fn check_state(&self, category: SyncCategory) -> Result<SyncState, SyncError> {
        let marker = KvStore::get(&self.pool, category.marker_key()).await?;
        let Some(marker) = marker else {
            return Ok(SyncState::NeverSynced);
        };
        if marker != today_string() {
            return Ok(SyncState::Stale);
        }
        // A fresh marker without its payload means the cache was partially
        // cleared; treat it as stale so the payload gets refetched.
        let payload = KvStore::contains_key(&self.pool, category.payload_key()).await?;
        Ok(if payload {
            SyncState::UpToDate
        } else {
            SyncState::Stale
        })
    }

    /// Refresh `category` unless it is already up to date.
    ///
    /// Returns whether a fetch actually happened.
    pub async fn ensure_fresh(&self, category: SyncCategory) -> Result<bool, SyncError> {
        let state = self.check_state(category).await?;
        if state == SyncState::UpToDate {
            tracing::debug!(?category, "Local copy is current, skipping fetch");
            return Ok(false);
        }
        tracing::info!(?category, ?state, "Local copy needs a refresh");
        self.force_refresh(category).await?;
        Ok(true)
    }

    /// Refresh `category` unconditionally.
    pub async fn force_refresh(&self, category: SyncCategory) -> Result<(), SyncError> {
        match category {
            SyncCategory::Catalog => self.refresh_catalog().await?,
            SyncCategory::PlayerRecords => self.refresh_player_records().await?,
        }
        self.stamp_today(category).await?;
        Ok(())
    }

    async fn refresh_catalog(&self) -> Result<(), SyncError> {
        let songs = self.source.music_data().await?;
        let payload = serde_json::to_string(&songs)?;
        KvStore::put(&self.pool, keys::SONG_DATA, &payload).await?;

        let (song_rows, chart_rows) = mapping::map_songs_to_rows(&songs);
        if let Err(e) = SongRepo::replace_catalog(&self.pool, &song_rows, &chart_rows).await {
            tracing::warn!(
                error = %e,
                "Catalog cached but relational projection failed",
            );
        }
        tracing::info!(songs = songs.len(), "Refreshed song catalog");
        Ok(())
    }

    async fn refresh_player_records(&self) -> Result<(), SyncError> {
        let payload = self.source.player_records().await?;
        let encoded = serde_json::to_string(&payload)?;
        KvStore::put(&self.pool, keys::PLAYER_RECORD_DATA, &encoded).await?;

        let rows = mapping::map_player_record(&payload);
        if let Err(e) = RecordRepo::upsert_all(&self.pool, &rows).await {
            tracing::warn!(
                error = %e,
                "Player records cached but relational projection failed",
            );
        }
        tracing::info!(records = rows.len(), "Refreshed player records");
        Ok(())
    }

    async fn stamp_today(&self, category: SyncCategory) -> Result<(), SyncError> {
        KvStore::put(&self.pool, category.marker_key(), &today_string()).await?;
        Ok(())
    }

    /// The cached song catalog, decoded.
    pub async fn local_songs(&self) -> Result<Vec<maipal_client::models::Song>, SyncError> {
        let payload = KvStore::get(&self.pool, keys::SONG_DATA)
            .await?
            .ok_or(SyncError::NoLocalData)?;
        Ok(serde_json::from_str(&payload)?)
    }

    /// The cached player payload, decoded.
    pub async fn local_player_record(
        &self,
    ) -> Result<maipal_client::models::PlayerRecord, SyncError> {
        let payload = KvStore::get(&self.pool, keys::PLAYER_RECORD_DATA)
            .await?
            .ok_or(SyncError::NoLocalData)?;
        Ok(serde_json::from_str(&payload)?)
    }

    /// Rebuild the relational record rows from the cached payload.
    ///
    /// Returns `false` when nothing is cached.
    pub async fn resync_local_records(&self) -> Result<bool, SyncError> {
        let payload = match KvStore::get(&self.pool, keys::PLAYER_RECORD_DATA).await? {
            Some(p) => p,
            None => return Ok(false),
        };
        let decoded: maipal_client::models::PlayerRecord = serde_json::from_str(&payload)?;
        let rows = mapping::map_player_record(&decoded);

        RecordRepo::delete_all(&self.pool).await?;
        RecordRepo::upsert_all(&self.pool, &rows).await?;
        tracing::info!(records = rows.len(), "Rebuilt record rows from cache");
        Ok(true)
    }

    /// Drop the cached catalog, both copies and the marker.
    pub async fn clear_local_catalog(&self) -> Result<(), SyncError> {
        KvStore::remove(&self.pool, keys::SONG_DATA).await?;
        KvStore::remove(&self.pool, keys::LAST_SONG_UPDATE_DATE).await?;
        // Charts reference songs, so they go first.
        ChartRepo::clear(&self.pool).await?;
        SongRepo::clear(&self.pool).await?;
        Ok(())
    }

    /// Drop the cached player records, both copies and the marker.
    pub async fn clear_local_player_record(&self) -> Result<(), SyncError> {
        KvStore::remove(&self.pool, keys::PLAYER_RECORD_DATA).await?;
        KvStore::remove(&self.pool, keys::LAST_PLAYER_RECORD_UPDATE_DATE).await?;
        RecordRepo::delete_all(&self.pool).await?;
        Ok(())
    }

    /// Drop everything the sync layer has cached.
    pub async fn clear_all_local(&self) -> Result<(), SyncError> {
        self.clear_local_catalog().await?;
        self.clear_local_player_record().await?;
        Ok(())
    }
}

/// Today's date in local time, as YYYY-MM-DD.
pub(crate) fn today_string() -> String {
    chrono::Local::now().date_naive().to_string()
}
