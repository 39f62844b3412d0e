pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::analyze::handlers::{handle_analyze_resume, ANALYZE_BODY_LIMIT_BYTES};
use crate::chat::handlers::handle_chat;
use crate::recommend::handlers::handle_recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/chat", post(handle_chat))
        .route("/api/recommend-project", post(handle_recommend))
        .route(
            "/api/analyze-resume",
            post(handle_analyze_resume).layer(DefaultBodyLimit::max(ANALYZE_BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}
