//! HTTP handlers for interview endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::session::{InMemorySessionRegistry, SharedSession};
use crate::application::{InterviewController, InterviewError};
use crate::domain::foundation::SessionId;
use crate::domain::interview::{InterviewLanguage, InterviewSession};

use super::dto::{
    CreateInterviewRequest, ErrorResponse, InterviewResponse, SendMessageRequest, TurnResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct InterviewAppState {
    controller: Arc<InterviewController>,
    registry: InMemorySessionRegistry,
    default_language: InterviewLanguage,
}

impl InterviewAppState {
    pub fn new(
        controller: Arc<InterviewController>,
        registry: InMemorySessionRegistry,
        default_language: InterviewLanguage,
    ) -> Self {
        Self {
            controller,
            registry,
            default_language,
        }
    }

    pub fn registry(&self) -> &InMemorySessionRegistry {
        &self.registry
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

/// POST /api/interviews - Create a session and emit the greeting
pub async fn create_interview(
    State(state): State<InterviewAppState>,
    body: Option<Json<CreateInterviewRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let language = match req.language.as_deref() {
        Some(name) => match name.parse::<InterviewLanguage>() {
            Ok(language) => language,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string())))
                    .into_response()
            }
        },
        None => state.default_language,
    };

    let mut session = InterviewSession::new(language);
    if let Err(e) = state.controller.start(&mut session) {
        return handle_interview_error(e);
    }

    let response = InterviewResponse::from(&session);
    state.registry.insert(session).await;

    (StatusCode::CREATED, Json(response)).into_response()
}

/// GET /api/interviews/:id - Session details
pub async fn get_interview(
    State(state): State<InterviewAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = match find_session(&state, &session_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let guard = session.lock().await;
    (StatusCode::OK, Json(InterviewResponse::from(&*guard))).into_response()
}

/// POST /api/interviews/:id/messages - Process one candidate message
pub async fn send_message(
    State(state): State<InterviewAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let session = match find_session(&state, &session_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    // Held across the model call: one turn at a time per session.
    let mut guard = session.lock().await;

    match state.controller.process_user_turn(&mut guard, &req.content).await {
        Ok(outcome) => (StatusCode::OK, Json(TurnResponse::from(outcome))).into_response(),
        Err(e) => handle_interview_error(e),
    }
}

async fn find_session(
    state: &InterviewAppState,
    raw_id: &str,
) -> Result<SharedSession, Response> {
    let id = raw_id.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })?;

    state.registry.get(&id).await.ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Interview", raw_id)),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_interview_error(error: InterviewError) -> Response {
    let message = error.to_string();
    match error {
        InterviewError::SessionClosed => {
            (StatusCode::CONFLICT, Json(ErrorResponse::conflict(message))).into_response()
        }
        InterviewError::EmptyMessage => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
        }
        InterviewError::RateLimited { retry_after_secs } => (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after_secs.to_string())],
            Json(ErrorResponse::rate_limited(message, retry_after_secs)),
        )
            .into_response(),
        InterviewError::TransientError { .. } => {
            (StatusCode::BAD_GATEWAY, Json(ErrorResponse::bad_gateway(message))).into_response()
        }
        InterviewError::InvalidState(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(message)),
        )
            .into_response(),
    }
}
