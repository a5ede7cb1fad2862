use sqlx::SqlitePool;

use maipal_core::Difficulty;
use maipal_db::models::{NewChart, SongSearchFilter, SongRow};
use maipal_db::{SongRepo, SongSearchRepo};

fn song(id: i64, title: &str, version: &str) -> SongRow {
    SongRow {
        id,
        title: title.to_owned(),
        artist: "artist".to_owned(),
        genre: "POPS".to_owned(),
        bpm: 170,
        from_version: version.to_owned(),
        song_type: "DX".to_owned(),
        is_new: false,
        buddy: None,
    }
}

fn chart(song_id: i64, difficulty: Difficulty, ds: f64) -> NewChart {
    NewChart {
        song_id,
        difficulty,
        song_type: "DX".to_owned(),
        ds,
        level: format!("{}", ds.floor() as i64),
        charter: "someone".to_owned(),
        notes_tap: 100,
        notes_hold: 20,
        notes_slide: 30,
        notes_touch: 5,
        notes_break: 10,
        notes_total: 165,
    }
}

async fn seed(pool: &SqlitePool) {
    let songs = vec![
        song(1, "gentle breeze", "FESTiVAL"),
        song(2, "storm warning", "BUDDiES"),
        song(3, "breeze again", "BUDDiES"),
    ];
    let charts = vec![
        chart(1, Difficulty::Basic, 4.0),
        chart(1, Difficulty::Master, 11.0),
        chart(2, Difficulty::Master, 13.0),
        chart(2, Difficulty::ReMaster, 14.5),
        chart(3, Difficulty::Master, 12.0),
    ];
    SongRepo::replace_catalog(pool, &songs, &charts).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_filter_returns_everything_with_charts(pool: SqlitePool) {
    seed(&pool).await;

    let hits = SongSearchRepo::search(&pool, &SongSearchFilter::default())
        .await
        .unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].song.id, 1);
    assert_eq!(hits[0].charts.len(), 2);
    assert_eq!(hits[1].charts.len(), 2);
    assert_eq!(hits[2].charts.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn ds_range_selects_songs_with_a_chart_inside_it(pool: SqlitePool) {
    seed(&pool).await;

    let filter = SongSearchFilter {
        min_ds: Some(12.5),
        max_ds: Some(13.5),
        ..Default::default()
    };
    let hits = SongSearchRepo::search(&pool, &filter).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].song.id, 2);
    // The range selects the song; all of its charts come back.
    assert_eq!(hits[0].charts.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn open_ended_range_only_bounds_one_side(pool: SqlitePool) {
    seed(&pool).await;

    let filter = SongSearchFilter {
        min_ds: Some(12.0),
        ..Default::default()
    };
    let hits = SongSearchRepo::search(&pool, &filter).await.unwrap();
    let ids: Vec<i64> = hits.iter().map(|h| h.song.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[sqlx::test(migrations = "./migrations")]
async fn title_filter_is_a_substring_match(pool: SqlitePool) {
    seed(&pool).await;

    let filter = SongSearchFilter {
        title: Some("breeze".to_owned()),
        ..Default::default()
    };
    let hits = SongSearchRepo::search(&pool, &filter).await.unwrap();
    let ids: Vec<i64> = hits.iter().map(|h| h.song.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[sqlx::test(migrations = "./migrations")]
async fn version_filter_matches_exactly(pool: SqlitePool) {
    seed(&pool).await;

    let filter = SongSearchFilter {
        version: Some("BUDDiES".to_owned()),
        ..Default::default()
    };
    let hits = SongSearchRepo::search(&pool, &filter).await.unwrap();
    let ids: Vec<i64> = hits.iter().map(|h| h.song.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[sqlx::test(migrations = "./migrations")]
async fn combined_filters_intersect(pool: SqlitePool) {
    seed(&pool).await;

    let filter = SongSearchFilter {
        title: Some("breeze".to_owned()),
        min_ds: Some(11.5),
        max_ds: Some(12.5),
        version: Some("BUDDiES".to_owned()),
    };
    let hits = SongSearchRepo::search(&pool, &filter).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].song.id, 3);
}
