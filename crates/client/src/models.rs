//! Wire models for the scoring service API.
//!
//! Field renames follow the remote JSON contract exactly; these types also
//! serialize back out unchanged because the sync layer caches the raw
//! payloads as JSON blobs in the key-value store.

use serde::{Deserialize, Serialize};

/// One catalog entry: a song plus its per-difficulty charts.
///
/// `ds`, `level`, `cids` and `charts` are parallel lists indexed by the
/// chart position (0..4 for standard songs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub song_type: String,
    pub ds: Vec<f64>,
    pub level: Vec<String>,
    #[serde(default)]
    pub cids: Vec<i64>,
    pub charts: Vec<ChartInfo>,
    #[serde(rename = "basic_info")]
    pub basic_info: BasicInfo,
}

/// Per-chart payload: note counts in tap/hold/slide/touch/break order,
/// plus the charter credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInfo {
    pub notes: Vec<i64>,
    pub charter: String,
}

/// Song-level metadata nested under `basic_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub bpm: i64,
    #[serde(rename = "release_date", default)]
    pub release_date: String,
    pub from: String,
    #[serde(rename = "is_new")]
    pub is_new: bool,
}

/// The player's full record set as returned by `player/records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "additional_rating")]
    pub additional_rating: i64,
    pub nickname: String,
    #[serde(default)]
    pub plate: String,
    pub rating: i64,
    pub records: Vec<Record>,
    pub username: String,
}

/// A player's best-known result for one (song, difficulty) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub achievements: f64,
    pub ds: f64,
    #[serde(rename = "dxScore")]
    pub dx_score: i64,
    pub fc: String,
    pub fs: String,
    pub level: String,
    #[serde(rename = "level_index")]
    pub level_index: i64,
    #[serde(rename = "level_label")]
    pub level_label: String,
    pub ra: i64,
    pub rate: String,
    #[serde(rename = "song_id")]
    pub song_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub song_type: String,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Login response body; the session token travels in a header, not here.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    pub message: Option<String>,
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    /// Session token lifted from the `set-cookie` response header.
    pub token: String,
    /// Human-readable server message, when present.
    pub message: Option<String>,
}
