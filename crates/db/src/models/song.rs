//! Song catalog entity.

use maipal_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full song row from the `songs` table.
///
/// The primary key is the remote service's stable song id, so this struct
/// doubles as the insert shape -- there is no surrogate-key create DTO.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SongRow {
    pub id: DbId,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub bpm: i64,
    /// Origin game version tag (e.g. `"maimai でらっくす"`).
    pub from_version: String,
    /// `"SD"` for standard charts, `"DX"` for the extended variant.
    pub song_type: String,
    pub is_new: bool,
    /// Co-op marker, set when the title carries the `[協]` prefix.
    pub buddy: Option<String>,
}
