//! Per-difficulty chart entity.

use maipal_core::types::DbId;
use maipal_core::Difficulty;
use serde::Serialize;
use sqlx::FromRow;

/// Full chart row from the `charts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ChartRow {
    pub id: DbId,
    pub song_id: DbId,
    pub difficulty: Difficulty,
    pub song_type: String,
    /// Decimal difficulty constant.
    pub ds: f64,
    /// Display level label (e.g. `"13+"`).
    pub level: String,
    pub charter: String,
    pub notes_tap: i64,
    pub notes_hold: i64,
    pub notes_slide: i64,
    pub notes_touch: i64,
    pub notes_break: i64,
    /// Always the sum of the five counters above.
    pub notes_total: i64,
}

/// Insert shape for a chart (surrogate id assigned by the database).
#[derive(Debug, Clone, PartialEq)]
pub struct NewChart {
    pub song_id: DbId,
    pub difficulty: Difficulty,
    pub song_type: String,
    pub ds: f64,
    pub level: String,
    pub charter: String,
    pub notes_tap: i64,
    pub notes_hold: i64,
    pub notes_slide: i64,
    pub notes_touch: i64,
    pub notes_break: i64,
    pub notes_total: i64,
}
