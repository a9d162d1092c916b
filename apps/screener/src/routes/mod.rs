pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::ui;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(ui::page_handler))
        .route("/health", get(health::health_handler))
        .route("/api/info", get(handlers::handle_info))
        .route("/api/analyze", post(handlers::handle_analyze))
        .layer(body_limit)
        .with_state(state)
}
