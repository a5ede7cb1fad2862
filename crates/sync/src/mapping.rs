//! Projection between the wire payloads and the relational rows.
//!
//! The relational side exists for queries (search, per-song lookups,
//! rating ordering); the raw payloads stay authoritative in the
//! key-value store and can be re-projected at any time.

use maipal_client::models::{BasicInfo, ChartInfo, PlayerRecord, Record, Song};
use maipal_core::Difficulty;
use maipal_db::models::{NewChart, NewRecord, SongRow, SongWithCharts};

/// Catalog genre of banquet ("utage") songs, which use their own
/// difficulty tiers instead of the standard five.
pub const BANQUET_GENRE: &str = "宴会場";

/// Title prefix marking a two-player buddy chart.
const BUDDY_MARKER: &str = "[協]";

/// Note counts arrive as a positional list: tap, hold, slide, touch,
/// break. Touch is absent on standard charts, which ship four entries.
fn note_at(notes: &[i64], index: usize) -> i64 {
    notes.get(index).copied().unwrap_or(0)
}

fn chart_difficulty(song: &Song, index: usize) -> Option<Difficulty> {
    if song.basic_info.genre == BANQUET_GENRE {
        // Banquet songs use a single tier for every chart: the 2P
        // variant when the song carries two or more charts.
        Some(if song.charts.len() >= 2 {
            Difficulty::Utage2p
        } else {
            Difficulty::Utage
        })
    } else {
        Difficulty::from_chart_index(index)
    }
}

fn new_chart(song: &Song, index: usize, info: &ChartInfo, difficulty: Difficulty) -> NewChart {
    let tap = note_at(&info.notes, 0);
    let hold = note_at(&info.notes, 1);
    let slide = note_at(&info.notes, 2);
    let touch = if info.notes.len() >= 5 {
        note_at(&info.notes, 3)
    } else {
        0
    };
    let brk = note_at(&info.notes, info.notes.len().saturating_sub(1));
    NewChart {
        song_id: song.id,
        difficulty,
        song_type: song.song_type.clone(),
        ds: song.ds.get(index).copied().unwrap_or(0.0),
        level: song.level.get(index).cloned().unwrap_or_default(),
        charter: info.charter.clone(),
        notes_tap: tap,
        notes_hold: hold,
        notes_slide: slide,
        notes_touch: touch,
        notes_break: brk,
        notes_total: tap + hold + slide + touch + brk,
    }
}

/// Project a fetched catalog into song and chart rows.
///
/// Charts whose position maps to no known difficulty are skipped rather
/// than failing the whole projection.
pub fn map_songs_to_rows(songs: &[Song]) -> (Vec<SongRow>, Vec<NewChart>) {
    let mut song_rows = Vec::with_capacity(songs.len());
    let mut chart_rows = Vec::new();

    for song in songs {
        let buddy = song
            .title
            .starts_with(BUDDY_MARKER)
            .then(|| "協".to_owned());
        song_rows.push(SongRow {
            id: song.id,
            title: song.title.clone(),
            artist: song.basic_info.artist.clone(),
            genre: song.basic_info.genre.clone(),
            bpm: song.basic_info.bpm,
            from_version: song.basic_info.from.clone(),
            song_type: song.song_type.clone(),
            is_new: song.basic_info.is_new,
            buddy,
        });

        for (index, info) in song.charts.iter().enumerate() {
            match chart_difficulty(song, index) {
                Some(difficulty) => {
                    chart_rows.push(new_chart(song, index, info, difficulty));
                }
                None => {
                    tracing::warn!(
                        song_id = song.id,
                        index,
                        "Chart position maps to no difficulty, skipping",
                    );
                }
            }
        }
    }

    (song_rows, chart_rows)
}

/// Rebuild a wire-shaped song from its relational rows.
///
/// The inverse of [`map_songs_to_rows`] up to fields the rows do not
/// keep: `cids` comes back empty and `release_date` blank.
pub fn song_from_rows(entry: &SongWithCharts) -> Song {
    let mut charts = entry.charts.clone();
    charts.sort_by_key(|c| c.difficulty.order_index());

    Song {
        id: entry.song.id,
        title: entry.song.title.clone(),
        song_type: entry.song.song_type.clone(),
        ds: charts.iter().map(|c| c.ds).collect(),
        level: charts.iter().map(|c| c.level.clone()).collect(),
        cids: Vec::new(),
        charts: charts
            .iter()
            .map(|c| ChartInfo {
                notes: vec![
                    c.notes_tap,
                    c.notes_hold,
                    c.notes_slide,
                    c.notes_touch,
                    c.notes_break,
                ],
                charter: c.charter.clone(),
            })
            .collect(),
        basic_info: BasicInfo {
            title: entry.song.title.clone(),
            artist: entry.song.artist.clone(),
            genre: entry.song.genre.clone(),
            bpm: entry.song.bpm,
            release_date: String::new(),
            from: entry.song.from_version.clone(),
            is_new: entry.song.is_new,
        },
    }
}

/// Project one wire record into an upsertable row.
pub fn map_record(record: &Record) -> NewRecord {
    NewRecord {
        song_id: record.song_id,
        level_index: record.level_index,
        achievements: record.achievements,
        ds: record.ds,
        dx_score: record.dx_score,
        fc: record.fc.clone(),
        fs: record.fs.clone(),
        level: record.level.clone(),
        level_label: record.level_label.clone(),
        ra: record.ra,
        rate: record.rate.clone(),
        title: record.title.clone(),
        song_type: record.song_type.clone(),
    }
}

/// Project a full player payload into upsertable rows.
pub fn map_player_record(payload: &PlayerRecord) -> Vec<NewRecord> {
    payload.records.iter().map(map_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(genre: &str, title: &str, charts: usize) -> Song {
        Song {
            id: 11,
            title: title.to_owned(),
            song_type: "DX".to_owned(),
            ds: (0..charts).map(|i| 10.0 + i as f64).collect(),
            level: (0..charts).map(|i| format!("{}", 10 + i)).collect(),
            cids: Vec::new(),
            charts: (0..charts)
                .map(|i| ChartInfo {
                    notes: vec![100 + i as i64, 20, 30, 5, 10],
                    charter: "someone".to_owned(),
                })
                .collect(),
            basic_info: BasicInfo {
                title: title.to_owned(),
                artist: "artist".to_owned(),
                genre: genre.to_owned(),
                bpm: 150,
                release_date: String::new(),
                from: "BUDDiES".to_owned(),
                is_new: true,
            },
        }
    }

    #[test]
    fn standard_song_maps_to_tiered_charts() {
        let (songs, charts) = map_songs_to_rows(&[song("POPS", "song a", 5)]);
        assert_eq!(songs.len(), 1);
        assert_eq!(charts.len(), 5);
        assert_eq!(charts[0].difficulty, Difficulty::Basic);
        assert_eq!(charts[4].difficulty, Difficulty::ReMaster);
        assert_eq!(songs[0].buddy, None);
    }

    #[test]
    fn single_chart_banquet_song_is_utage() {
        let (_, charts) = map_songs_to_rows(&[song(BANQUET_GENRE, "[宴]song", 1)]);
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].difficulty, Difficulty::Utage);
    }

    #[test]
    fn multi_chart_banquet_song_is_all_utage_2p() {
        let (_, charts) = map_songs_to_rows(&[song(BANQUET_GENRE, "[宴]song", 2)]);
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].difficulty, Difficulty::Utage2p);
        assert_eq!(charts[1].difficulty, Difficulty::Utage2p);
    }

    #[test]
    fn banquet_charts_beyond_the_second_are_kept() {
        let (_, charts) = map_songs_to_rows(&[song(BANQUET_GENRE, "[宴]song", 3)]);
        assert_eq!(charts.len(), 3);
        assert!(charts.iter().all(|c| c.difficulty == Difficulty::Utage2p));
    }

    #[test]
    fn buddy_marker_sets_buddy_column() {
        let (songs, _) = map_songs_to_rows(&[song(BANQUET_GENRE, "[協]pair song", 1)]);
        assert_eq!(songs[0].buddy.as_deref(), Some("協"));
    }

    #[test]
    fn four_entry_note_list_has_no_touch() {
        let mut s = song("POPS", "old chart", 1);
        s.charts[0].notes = vec![100, 20, 30, 10];
        let (_, charts) = map_songs_to_rows(&[s]);
        assert_eq!(charts[0].notes_touch, 0);
        assert_eq!(charts[0].notes_break, 10);
        assert_eq!(charts[0].notes_total, 160);
    }

    #[test]
    fn five_entry_note_list_keeps_touch() {
        let (_, charts) = map_songs_to_rows(&[song("POPS", "dx chart", 1)]);
        assert_eq!(charts[0].notes_touch, 5);
        assert_eq!(charts[0].notes_total, 165);
    }

    #[test]
    fn song_round_trips_through_rows() {
        let original = song("POPS", "round trip", 5);
        let (songs, charts) = map_songs_to_rows(&[original.clone()]);
        let entry = SongWithCharts {
            song: songs.into_iter().next().unwrap(),
            charts: charts
                .into_iter()
                .enumerate()
                .map(|(i, c)| maipal_db::models::ChartRow {
                    id: i as i64 + 1,
                    song_id: c.song_id,
                    difficulty: c.difficulty,
                    song_type: c.song_type,
                    ds: c.ds,
                    level: c.level,
                    charter: c.charter,
                    notes_tap: c.notes_tap,
                    notes_hold: c.notes_hold,
                    notes_slide: c.notes_slide,
                    notes_touch: c.notes_touch,
                    notes_break: c.notes_break,
                    notes_total: c.notes_total,
                })
                .collect(),
        };
        let rebuilt = song_from_rows(&entry);
        assert_eq!(rebuilt.ds, original.ds);
        assert_eq!(rebuilt.level, original.level);
        assert_eq!(rebuilt.charts, original.charts);
        assert_eq!(rebuilt.basic_info.artist, original.basic_info.artist);
    }
}
