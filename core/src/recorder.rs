use crate::error::RecorderError;
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const RESULT_TABLE: &str = "result_cleansing";
pub const DEFAULT_DATABASE_PATH: &str = "challenge.db";

const CREATE_RESULT_TABLE: &str = "CREATE TABLE IF NOT EXISTS result_cleansing (input, output)";
const INSERT_RESULT_ROW: &str = "INSERT INTO result_cleansing (input, output) VALUES (?1, ?2)";

/// One cleansing result: the raw text and what the normalizer made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleansingRow {
    pub input: String,
    pub output: String,
}

impl CleansingRow {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Append-only sink for cleansing results.
///
/// Nothing calls a recorder implicitly; the web layer only records when one
/// is injected into its state.
pub trait Recorder: Send + Sync {
    fn record_pair(&self, input: &str, output: &str) -> Result<(), RecorderError>;

    fn record_batch(&self, rows: &[CleansingRow]) -> Result<(), RecorderError>;
}

/// Recorder backed by a single SQLite file.
///
/// Every call opens its own connection and closes it on return. There is no
/// pooling and no retry, so a writer that hits a locked database gets the
/// SQLite error back.
#[derive(Debug, Clone)]
pub struct SqliteRecorder {
    database_path: PathBuf,
}

impl SqliteRecorder {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    fn open(&self) -> Result<Connection, RecorderError> {
        let connection =
            Connection::open(&self.database_path).map_err(|source| RecorderError::Open {
                path: self.database_path.clone(),
                source,
            })?;
        connection.execute(CREATE_RESULT_TABLE, [])?;
        Ok(connection)
    }

    /// All stored rows in insertion order.
    pub fn rows(&self) -> Result<Vec<CleansingRow>, RecorderError> {
        let connection = self.open()?;
        let mut statement =
            connection.prepare("SELECT input, output FROM result_cleansing ORDER BY rowid")?;
        let rows = statement
            .query_map([], |row| {
                Ok(CleansingRow {
                    input: row.get(0)?,
                    output: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn count_rows(&self) -> Result<u64, RecorderError> {
        let connection = self.open()?;
        let count: i64 =
            connection.query_row("SELECT COUNT(*) FROM result_cleansing", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RecorderError::Sqlite(rusqlite::Error::IntegralValueOutOfRange(0, count)))
    }
}

impl Default for SqliteRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

impl Recorder for SqliteRecorder {
    fn record_pair(&self, input: &str, output: &str) -> Result<(), RecorderError> {
        let connection = self.open()?;
        connection.execute(INSERT_RESULT_ROW, params![input, output])?;
        Ok(())
    }

    fn record_batch(&self, rows: &[CleansingRow]) -> Result<(), RecorderError> {
        let mut connection = self.open()?;
        let transaction = connection.transaction()?;
        {
            let mut statement = transaction.prepare(INSERT_RESULT_ROW)?;
            for row in rows {
                statement.execute(params![row.input, row.output])?;
            }
        }
        transaction.commit()?;
        Ok(())
    }
}
