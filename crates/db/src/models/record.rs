//! Player best-record entity.

use maipal_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full record row from the `records` table.
///
/// Title/type/level/level_label/ds are denormalized copies of the song and
/// chart data so record lists render without a join.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RecordRow {
    pub id: DbId,
    pub song_id: DbId,
    /// Remote difficulty index for the played chart (0..4 standard).
    pub level_index: i64,
    /// Achievement percentage; rhythm-game scoring can exceed 100.
    pub achievements: f64,
    pub ds: f64,
    pub dx_score: i64,
    /// Full-combo status tag (`""`, `"fc"`, `"fcp"`, `"ap"`, `"app"`).
    pub fc: String,
    /// Full-sync status tag (`""`, `"fs"`, `"fsp"`, `"fsd"`, `"fsdp"`).
    pub fs: String,
    pub level: String,
    pub level_label: String,
    /// Derived numeric rank value.
    pub ra: i64,
    /// Letter-grade rank (`"sss"`, `"ssp"`, ...).
    pub rate: String,
    pub title: String,
    pub song_type: String,
}

/// Insert/upsert shape for a record, keyed logically by (song_id, level_index).
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub song_id: DbId,
    pub level_index: i64,
    pub achievements: f64,
    pub ds: f64,
    pub dx_score: i64,
    pub fc: String,
    pub fs: String,
    pub level: String,
    pub level_label: String,
    pub ra: i64,
    pub rate: String,
    pub title: String,
    pub song_type: String,
}
