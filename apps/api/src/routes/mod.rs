pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::errors::AppError;
use crate::interview::handlers as interview;
use crate::navigation;
use crate::questions::handlers as questions;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/navigation", get(navigation::handle_navigation))
        // AI Assistant
        .route("/api/v1/chat/sessions", post(chat::handle_create_session))
        .route(
            "/api/v1/chat/sessions/:id",
            get(chat::handle_get_session).delete(chat::handle_delete_session),
        )
        .route(
            "/api/v1/chat/sessions/:id/messages",
            post(chat::handle_send_message),
        )
        .route(
            "/api/v1/chat/quick-questions",
            get(chat::handle_quick_questions),
        )
        // Question Bank
        .route("/api/v1/questions", get(questions::handle_list_questions))
        .route("/api/v1/questions/facets", get(questions::handle_facets))
        .route(
            "/api/v1/questions/:id/saved",
            patch(questions::handle_set_saved),
        )
        // Mock Interview
        .route("/api/v1/interviews", post(interview::handle_start))
        .route("/api/v1/interviews/options", get(interview::handle_options))
        .route(
            "/api/v1/interviews/:id",
            get(interview::handle_get).delete(interview::handle_exit),
        )
        .route(
            "/api/v1/interviews/:id/answer",
            post(interview::handle_answer),
        )
        .route(
            "/api/v1/interviews/:id/previous",
            post(interview::handle_previous),
        )
        // Resume Analyzer
        .route(
            "/api/v1/resumes/analyze",
            post(resume::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .fallback(not_found)
        .with_state(state)
}
