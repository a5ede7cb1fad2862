//! Key-value store keys owned by the sync layer.

/// Date (YYYY-MM-DD, local time) of the last successful catalog fetch.
pub const LAST_SONG_UPDATE_DATE: &str = "last_song_update_date";
/// Raw catalog payload as fetched, JSON-encoded.
pub const SONG_DATA: &str = "song_data";
/// Date of the last successful player-record fetch.
pub const LAST_PLAYER_RECORD_UPDATE_DATE: &str = "last_player_record_update_date";
/// Raw player-record payload as fetched, JSON-encoded.
pub const PLAYER_RECORD_DATA: &str = "player_record_data";
