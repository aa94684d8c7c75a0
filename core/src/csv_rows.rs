use crate::error::CsvError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a header-less CSV and returns the first column of every row, in order.
///
/// The first row fixes the width. Shorter rows are fine (free text with an
/// unquoted comma often splits the first row), but a row wider than the first
/// one is rejected. Blank lines are skipped.
pub fn read_first_column<R: Read>(reader: R) -> Result<Vec<String>, CsvError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut width = None;
    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let expected = *width.get_or_insert(record.len());
        if record.len() > expected {
            return Err(CsvError::UnequalLengths {
                row: index as u64 + 1,
                expected: expected as u64,
                found: record.len() as u64,
            });
        }
        rows.push(record.get(0).unwrap_or_default().to_string());
    }

    Ok(rows)
}

pub fn read_first_column_from_path(path: &Path) -> Result<Vec<String>, CsvError> {
    let file = File::open(path)?;
    read_first_column(file)
}
