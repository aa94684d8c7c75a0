use crate::config::AppConfig;
use std::path::PathBuf;
use std::sync::Arc;
use textcleanse_core::{Recorder, SqliteRecorder};

pub struct AppState {
    pub upload_dir: PathBuf,
    pub recorder: Option<Arc<dyn Recorder>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> std::io::Result<Self> {
        let upload_dir = config.upload_dir();
        std::fs::create_dir_all(&upload_dir)?;

        let recorder: Option<Arc<dyn Recorder>> = if config.record_results {
            tracing::info!("Recording cleansing results to {:?}", config.database);
            Some(Arc::new(SqliteRecorder::new(&config.database)))
        } else {
            None
        };

        tracing::info!("Spooling uploads under {:?}", upload_dir);

        Ok(Self {
            upload_dir,
            recorder,
        })
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn Recorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }
}
