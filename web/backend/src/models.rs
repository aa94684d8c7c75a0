use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const TEXT_SUCCESS_DESCRIPTION: &str = "Result from text cleansing, Successful response !!!";
pub const FILE_SUCCESS_DESCRIPTION: &str = "Result from file cleansing, Successful response !!!";
pub const MISSING_TEXT_DESCRIPTION: &str = "Text data is null";
pub const MISSING_FILE_DESCRIPTION: &str = "No file inputed";

/// Response body shared by every cleansing endpoint.
///
/// `data` is only present on success; the HTTP status always mirrors
/// `status_code`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status_code: u16,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(description: &str, data: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            description: description.to_string(),
            data: Some(data),
        }
    }

    pub fn failure(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            description: description.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub const TEXT_PARAM: &str = "add_text";

/// Query parameters of the single-text endpoint.
///
/// Built from the raw pairs so a repeated `add_text` keeps its first value
/// instead of failing to deserialize.
#[derive(Debug, Default)]
pub struct TextQuery {
    pub add_text: Option<String>,
}

impl TextQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let add_text = pairs
            .into_iter()
            .find(|(key, _)| key == TEXT_PARAM)
            .map(|(_, value)| value);
        Self { add_text }
    }
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
