pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

/// Body cap for upload endpoints. Ten resumes at a couple of MB each fit
/// comfortably; anything larger is rejected at the HTTP boundary.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/generate-jd", post(handlers::handle_generate_jd))
        .route("/extract-jd", post(handlers::handle_extract_jd))
        .route("/evaluate", post(handlers::handle_evaluate))
        .route("/health", get(health::health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
