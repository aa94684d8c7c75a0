use rusqlite::Connection;
use std::sync::Arc;
use tempfile::TempDir;
use textcleanse_core::recorder::RESULT_TABLE;
use textcleanse_core::{CleansingRow, Recorder, SqliteRecorder};

fn scratch_recorder() -> (TempDir, SqliteRecorder) {
    let dir = tempfile::tempdir().unwrap();
    let recorder = SqliteRecorder::new(dir.path().join("results.db"));
    (dir, recorder)
}

fn table_exists(recorder: &SqliteRecorder) -> bool {
    let connection = Connection::open(recorder.database_path()).unwrap();
    let count: i64 = connection
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [RESULT_TABLE],
            |row| row.get(0),
        )
        .unwrap();
    count == 1
}

#[test]
fn test_record_pair_creates_table_and_appends() {
    let (_dir, recorder) = scratch_recorder();

    recorder.record_pair("Hello, World!", "Hello World").unwrap();

    assert!(table_exists(&recorder));
    assert_eq!(
        recorder.rows().unwrap(),
        vec![CleansingRow::new("Hello, World!", "Hello World")]
    );
}

#[test]
fn test_duplicates_accumulate() {
    let (_dir, recorder) = scratch_recorder();

    recorder.record_pair("same", "same").unwrap();
    recorder.record_pair("same", "same").unwrap();

    assert_eq!(recorder.count_rows().unwrap(), 2);
}

#[test]
fn test_record_batch_appends_in_order() {
    let (_dir, recorder) = scratch_recorder();
    recorder.record_pair("first", "first").unwrap();

    let batch = vec![
        CleansingRow::new("second!", "second"),
        CleansingRow::new("third?", "third"),
    ];
    recorder.record_batch(&batch).unwrap();

    let rows = recorder.rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].input, "first");
    assert_eq!(rows[1..], batch[..]);
}

#[test]
fn test_empty_batch_still_creates_table() {
    let (_dir, recorder) = scratch_recorder();

    recorder.record_batch(&[]).unwrap();

    assert!(table_exists(&recorder));
    assert_eq!(recorder.count_rows().unwrap(), 0);
}

#[test]
fn test_existing_table_is_reused() {
    let (_dir, recorder) = scratch_recorder();
    recorder.record_pair("a", "a").unwrap();

    let reopened = SqliteRecorder::new(recorder.database_path());
    reopened.record_pair("b", "b").unwrap();

    assert_eq!(reopened.count_rows().unwrap(), 2);
}

#[test]
fn test_recorder_as_trait_object() {
    let (_dir, recorder) = scratch_recorder();
    let shared: Arc<dyn Recorder> = Arc::new(recorder.clone());

    shared.record_pair("x", "x").unwrap();
    shared
        .record_batch(&[CleansingRow::new("y", "y")])
        .unwrap();

    assert_eq!(recorder.count_rows().unwrap(), 2);
}

#[test]
fn test_unopenable_database_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let recorder = SqliteRecorder::new(dir.path());

    assert!(recorder.record_pair("a", "b").is_err());
}

#[test]
fn test_count_rows_matches_stored_rows() {
    let (_dir, recorder) = scratch_recorder();
    recorder
        .record_batch(&[
            CleansingRow::new("a", "a"),
            CleansingRow::new("b", "b"),
            CleansingRow::new("c", "c"),
        ])
        .unwrap();

    let count = recorder.count_rows().unwrap();
    assert_eq!(count, 3);
    assert_eq!(count, recorder.rows().unwrap().len() as u64);
}
