pub mod csv_rows;
pub mod error;
pub mod recorder;
pub mod text_cleansing;

// Re-export commonly used items
pub use csv_rows::{read_first_column, read_first_column_from_path};
pub use error::{CsvError, RecorderError};
pub use recorder::{CleansingRow, Recorder, SqliteRecorder};
pub use text_cleansing::{normalize, normalize_all};

// Re-export PyO3 module when python feature is enabled
#[cfg(feature = "python")]
pub use text_cleansing::cleansing;
