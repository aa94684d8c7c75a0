use crate::models::Envelope;
use axum::extract::{multipart::MultipartError, rejection::QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use textcleanse_core::{CsvError, RecorderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Text data is null")]
    MissingText,
    #[error("No file inputed")]
    MissingFile,
    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),
    #[error("Invalid multipart upload: {0}")]
    Multipart(#[from] MultipartError),
    #[error("Malformed CSV file: {0}")]
    Csv(#[from] CsvError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage error: {0}")]
    Storage(#[from] RecorderError),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingText
            | AppError::MissingFile
            | AppError::Query(_)
            | AppError::Multipart(_)
            | AppError::Csv(CsvError::UnequalLengths { .. })
            | AppError::Csv(CsvError::InvalidUtf8 { .. })
            | AppError::Csv(CsvError::Parse(_)) => StatusCode::BAD_REQUEST,
            AppError::Csv(CsvError::Io(_))
            | AppError::Io(_)
            | AppError::Storage(_)
            | AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let description = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, "request rejected");
            self.to_string()
        };

        Envelope::<()>::failure(status, description).into_response()
    }
}
