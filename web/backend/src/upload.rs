use crate::error::AppError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use textcleanse_core::read_first_column_from_path;
use uuid::Uuid;

/// An uploaded file parked on disk for the length of one request.
///
/// The file name carries the request id, so concurrent uploads never share a
/// path. The file is removed when this value is dropped, whichever way the
/// request ends.
pub struct SpooledUpload {
    file: NamedTempFile,
}

impl SpooledUpload {
    pub fn create(dir: &Path, request_id: Uuid, contents: &[u8]) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(&format!("cleansing-{request_id}-"))
            .suffix(".csv")
            .tempfile_in(dir)?;
        file.write_all(contents)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Spools the upload and reads the first column of every row.
pub fn read_upload_rows(
    dir: &Path,
    request_id: Uuid,
    contents: &[u8],
) -> Result<Vec<String>, AppError> {
    let upload = SpooledUpload::create(dir, request_id, contents)?;
    tracing::debug!(path = ?upload.path(), bytes = contents.len(), "spooled upload");
    let rows = read_first_column_from_path(upload.path())?;
    Ok(rows)
}
