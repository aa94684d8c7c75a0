pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::DEFAULT_MAX_UPLOAD_BYTES;
use state::AppState;

pub fn build_router(app_state: Arc<AppState>) -> Router {
    build_router_with_limit(app_state, DEFAULT_MAX_UPLOAD_BYTES)
}

pub fn build_router_with_limit(app_state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/text-processing", get(handlers::text_processing))
        .route("/file-processing", post(handlers::file_processing))
        .route(docs::DOCS_JSON_PATH, get(docs::api_docs))
        .route(docs::DOCS_UI_PATH, get(docs::api_docs_ui))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
