//! File-backed store tests.

use chrono::{NaiveDate, TimeZone, Utc};
use puzzleboard_core::{JsonlStore, PostStore, RawPost, RecordStore, ScoreRecord};
use std::fs;

fn record(player: &str, d: u32) -> ScoreRecord {
    ScoreRecord {
        player_id: player.to_string(),
        game_name: "Pinpoint".to_string(),
        game_number: 100 + d,
        scores: vec![3, 95],
        units: vec!["guesses".to_string(), "%".to_string()],
        game_date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
        submitted_at: Utc.with_ymd_and_hms(2025, 6, d, 9, 30, 0).unwrap(),
    }
}

#[test]
fn records_round_trip_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.jsonl");
    let mut store: JsonlStore<ScoreRecord> = JsonlStore::open(&path).unwrap();

    store.put(record("ada", 1)).unwrap();
    store.put(record("grace", 2)).unwrap();

    let all = store.scan_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], record("ada", 1));
    assert_eq!(all[1].scores, vec![3, 95]);
}

#[test]
fn scan_of_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store: JsonlStore<ScoreRecord> = JsonlStore::open(dir.path().join("none.jsonl")).unwrap();
    assert!(store.scan_all().unwrap().is_empty());
}

#[test]
fn delete_removes_all_records_for_player_and_date() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.jsonl");
    let mut store: JsonlStore<ScoreRecord> = JsonlStore::open(&path).unwrap();

    store.put(record("ada", 1)).unwrap();
    store.put(record("ada", 1)).unwrap();
    store.put(record("ada", 2)).unwrap();

    store.delete(&record("ada", 1).key()).unwrap();
    let remaining = store.scan_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].game_date, record("ada", 2).game_date);
}

#[test]
fn malformed_lines_are_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.jsonl");
    let mut store: JsonlStore<ScoreRecord> = JsonlStore::open(&path).unwrap();
    store.put(record("ada", 1)).unwrap();

    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("not json at all\n");
    fs::write(&path, content).unwrap();
    store.put(record("grace", 2)).unwrap();

    let all = store.scan_all().unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn raw_posts_round_trip_and_delete_by_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posts.jsonl");
    let mut store: JsonlStore<RawPost> = JsonlStore::open(&path).unwrap();

    let first = RawPost::new(
        "ada",
        "Pinpoint #135 | 3 guesses",
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
    );
    let second = RawPost::new(
        "ada",
        "garbage that never parsed",
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap(),
    );
    store.put(first.clone()).unwrap();
    store.put(second.clone()).unwrap();

    store.delete(&first.key()).unwrap();
    let remaining = store.scan_all().unwrap();
    assert_eq!(remaining, vec![second]);
}
