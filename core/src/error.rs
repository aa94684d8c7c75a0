use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("row {row} has {found} columns, expected {expected}")]
    UnequalLengths { row: u64, expected: u64, found: u64 },
    #[error("row {row} is not valid UTF-8")]
    InvalidUtf8 { row: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parsing error: {0}")]
    Parse(String),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        // Rows are reported 1-based, the way a spreadsheet would number them.
        let row_of = |pos: Option<&csv::Position>| pos.map_or(0, |p| p.record() + 1);

        match err.into_kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => CsvError::UnequalLengths {
                row: row_of(pos.as_ref()),
                expected: expected_len,
                found: len,
            },
            csv::ErrorKind::Utf8 { pos, .. } => CsvError::InvalidUtf8 {
                row: row_of(pos.as_ref()),
            },
            csv::ErrorKind::Io(io) => CsvError::Io(io),
            csv::ErrorKind::Deserialize { err, .. } => CsvError::Parse(err.to_string()),
            other => CsvError::Parse(format!("{other:?}")),
        }
    }
}

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("failed to open result database {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
