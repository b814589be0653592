//! HTTP routes for interview endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_interview, get_interview, health, send_message, InterviewAppState};

/// Creates the interview router. Call `.with_state()` to bind dependencies.
pub fn interview_router() -> Router<InterviewAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/interviews", post(create_interview))
        .route("/api/interviews/:id", get(get_interview))
        .route("/api/interviews/:id/messages", post(send_message))
}
