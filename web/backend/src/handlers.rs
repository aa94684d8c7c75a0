use crate::error::AppError;
use crate::models::{
    Envelope, FILE_SUCCESS_DESCRIPTION, HealthResponse, TEXT_SUCCESS_DESCRIPTION, TextQuery,
};
use crate::state::AppState;
use crate::upload::read_upload_rows;
use axum::{
    Json,
    extract::{
        Multipart, Query, State, multipart::MultipartRejection, rejection::QueryRejection,
    },
};
use std::sync::Arc;
use std::time::Instant;
use textcleanse_core::{CleansingRow, normalize, normalize_all};
use uuid::Uuid;

pub const FILE_FIELD: &str = "file";

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Text cleansing API is running".to_string(),
    })
}

pub async fn text_processing(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Envelope<String>, AppError> {
    let Query(pairs) = query?;
    let params = TextQuery::from_pairs(pairs);

    // An empty `add_text` is treated exactly like a missing one.
    let add_text = match params.add_text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(AppError::MissingText),
    };

    let cleaned = normalize(&add_text);
    tracing::debug!(input_len = add_text.len(), output_len = cleaned.len(), "cleansed text");

    if let Some(recorder) = state.recorder.clone() {
        let output = cleaned.clone();
        tokio::task::spawn_blocking(move || recorder.record_pair(&add_text, &output)).await??;
    }

    Ok(Envelope::success(TEXT_SUCCESS_DESCRIPTION, cleaned))
}

pub async fn file_processing(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Envelope<Vec<String>>, AppError> {
    // A body that is not multipart at all carries no file either.
    let Ok(mut multipart) = multipart else {
        return Err(AppError::MissingFile);
    };

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            upload = Some(field.bytes().await?);
            break;
        }
    }
    let contents = upload.ok_or(AppError::MissingFile)?;

    let request_id = Uuid::new_v4();
    let start_time = Instant::now();
    let upload_dir = state.upload_dir.clone();
    let rows =
        tokio::task::spawn_blocking(move || read_upload_rows(&upload_dir, request_id, &contents))
            .await??;

    let cleaned = normalize_all(&rows);
    tracing::info!(
        %request_id,
        rows = cleaned.len(),
        duration_ms = start_time.elapsed().as_millis() as u64,
        "cleansed uploaded file"
    );

    if let Some(recorder) = state.recorder.clone() {
        let batch: Vec<CleansingRow> = rows
            .into_iter()
            .zip(cleaned.iter().cloned())
            .map(|(input, output)| CleansingRow { input, output })
            .collect();
        tokio::task::spawn_blocking(move || recorder.record_batch(&batch)).await??;
    }

    Ok(Envelope::success(FILE_SUCCESS_DESCRIPTION, cleaned))
}
