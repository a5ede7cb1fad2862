//! Data-initialization flow: make both cached categories fresh, then
//! load the in-memory mirrors the UI reads from.

use maipal_client::models::{PlayerRecord, Song};
use maipal_sync::{ScoreSource, SyncCategory, SyncCoordinator, SyncError};

/// Progress of a data-initialization pass.
#[derive(Debug, Clone, PartialEq)]
pub enum DataInitState {
    Idle,
    Loading,
    Success(DataSnapshot),
    Error(String),
}

/// In-memory mirror of the cached payloads.
///
/// The catalog is always present on success. `player_record` stays
/// `None` when the user is not logged in or the record fetch failed;
/// the catalog alone is enough to browse songs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSnapshot {
    pub songs: Vec<Song>,
    pub player_record: Option<PlayerRecord>,
}

impl DataSnapshot {
    /// The player's rating, when records are loaded.
    pub fn rating(&self) -> Option<i64> {
        self.player_record.as_ref().map(|p| p.rating)
    }
}

/// Refresh stale categories and load the snapshot.
pub async fn initialize_data<S: ScoreSource>(sync: &SyncCoordinator<S>) -> DataInitState {
    match try_initialize(sync, false).await {
        Ok(snapshot) => DataInitState::Success(snapshot),
        Err(e) => {
            tracing::warn!(error = %e, "Data initialization failed");
            DataInitState::Error(e.to_string())
        }
    }
}

/// Refetch both categories regardless of freshness, then load.
pub async fn force_refresh_data<S: ScoreSource>(sync: &SyncCoordinator<S>) -> DataInitState {
    match try_initialize(sync, true).await {
        Ok(snapshot) => DataInitState::Success(snapshot),
        Err(e) => {
            tracing::warn!(error = %e, "Forced refresh failed");
            DataInitState::Error(e.to_string())
        }
    }
}

/// The catalog is mandatory; player records are best effort because an
/// anonymous session has none to fetch.
async fn try_initialize<S: ScoreSource>(
    sync: &SyncCoordinator<S>,
    force: bool,
) -> Result<DataSnapshot, SyncError> {
    if force {
        sync.force_refresh(SyncCategory::Catalog).await?;
    } else {
        sync.ensure_fresh(SyncCategory::Catalog).await?;
    }
    let songs = sync.local_songs().await?;

    let refresh = if force {
        sync.force_refresh(SyncCategory::PlayerRecords).await
    } else {
        sync.ensure_fresh(SyncCategory::PlayerRecords).await.map(|_| ())
    };
    let player_record = match refresh {
        Ok(()) => Some(sync.local_player_record().await?),
        Err(e) => {
            tracing::info!(error = %e, "Player records unavailable, continuing without them");
            match sync.local_player_record().await {
                Ok(cached) => Some(cached),
                Err(SyncError::NoLocalData) => None,
                Err(e) => return Err(e),
            }
        }
    };

    Ok(DataSnapshot {
        songs,
        player_record,
    })
}
