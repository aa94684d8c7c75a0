use std::io::Write;
use tempfile::NamedTempFile;
use textcleanse_core::{CsvError, read_first_column, read_first_column_from_path};

#[test]
fn test_reads_rows_in_order() {
    let rows = read_first_column("first\nsecond\nthird\n".as_bytes()).unwrap();
    assert_eq!(rows, vec!["first", "second", "third"]);
}

#[test]
fn test_first_row_is_not_a_header() {
    let rows = read_first_column("input\nhello".as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], "input");
}

#[test]
fn test_takes_first_column_only() {
    let rows = read_first_column("a,1\nb,2\n".as_bytes()).unwrap();
    assert_eq!(rows, vec!["a", "b"]);
}

#[test]
fn test_quoted_field_keeps_newline() {
    let rows = read_first_column("\"two\nlines\"\nsingle\n".as_bytes()).unwrap();
    assert_eq!(rows, vec!["two\nlines", "single"]);
}

#[test]
fn test_short_rows_are_accepted() {
    let rows = read_first_column("Hello, World!\nsecond row\nthird\n".as_bytes()).unwrap();
    assert_eq!(rows, vec!["Hello", "second row", "third"]);
}

#[test]
fn test_rows_wider_than_first_are_rejected() {
    let err = read_first_column("a\nb,c\n".as_bytes()).unwrap_err();
    assert!(
        matches!(
            err,
            CsvError::UnequalLengths {
                row: 2,
                expected: 1,
                found: 2,
            }
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let err = read_first_column(&[0xff, 0xfe, b'\n'][..]).unwrap_err();
    assert!(matches!(err, CsvError::InvalidUtf8 { .. }), "{err:?}");
}

#[test]
fn test_reads_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"RT @user: hi\nsecond row\n").unwrap();
    file.flush().unwrap();

    let rows = read_first_column_from_path(file.path()).unwrap();
    assert_eq!(rows, vec!["RT @user: hi", "second row"]);
}

#[test]
fn test_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_first_column_from_path(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, CsvError::Io(_)));
}
