use crate::interface_adapters::handlers::{health::health, ocr::extract_text};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

// Build the HTTP router for the OCR endpoints.
pub fn app(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/", post(extract_text))
        .route("/extract_text", post(extract_text))
        .route("/health", get(health))
        .layer(body_limit)
        .with_state(state)
}
