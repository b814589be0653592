//! Request and response bodies for interview endpoints.

use serde::{Deserialize, Serialize};

use crate::application::TurnOutcome;
use crate::domain::interview::{InterviewPhase, InterviewSession, Sentiment, Turn, TurnRole};
use crate::ports::TokenUsage;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/interviews`. Omitting `language` uses the configured default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInterviewRequest {
    #[serde(default)]
    pub language: Option<String>,
}

/// Body of `POST /api/interviews/:id/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnView {
    pub role: TurnRole,
    pub content: String,
}

impl From<&Turn> for TurnView {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role(),
            content: turn.content().to_string(),
        }
    }
}

/// Read-only view of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponse {
    pub id: String,
    pub language: String,
    pub phase: InterviewPhase,
    pub sentiment: Sentiment,
    pub sentiment_label: String,
    pub turns: Vec<TurnView>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&InterviewSession> for InterviewResponse {
    fn from(session: &InterviewSession) -> Self {
        Self {
            id: session.id().to_string(),
            language: session.language().to_string(),
            phase: session.phase(),
            sentiment: session.sentiment(),
            sentiment_label: session.sentiment().display_label().to_string(),
            turns: session.turns().iter().map(TurnView::from).collect(),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// Result of one processed message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub reply: String,
    pub phase: InterviewPhase,
    pub sentiment: Sentiment,
    pub transitioned_to_technical: bool,
    pub interview_ended: bool,
    pub transcript_saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl From<TurnOutcome> for TurnResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            reply: outcome.reply,
            phase: outcome.phase,
            sentiment: outcome.sentiment,
            transitioned_to_technical: outcome.transitioned_to_technical,
            interview_ended: outcome.interview_ended,
            transcript_saved: outcome.transcript_saved,
            persistence_error: outcome.persistence_error,
            usage: outcome.usage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("SESSION_CLOSED", message)
    }

    pub fn rate_limited(message: impl Into<String>, retry_after_secs: u32) -> Self {
        Self {
            details: Some(serde_json::json!({ "retry_after_secs": retry_after_secs })),
            ..Self::new("RATE_LIMITED", message)
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new("UPSTREAM_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::InterviewLanguage;

    #[test]
    fn create_request_language_is_optional() {
        let req: CreateInterviewRequest = serde_json::from_str("{}").unwrap();
        assert!(req.language.is_none());

        let req: CreateInterviewRequest =
            serde_json::from_str(r#"{"language": "German"}"#).unwrap();
        assert_eq!(req.language.as_deref(), Some("German"));
    }

    #[test]
    fn interview_response_serializes_view() {
        let mut session = InterviewSession::new(InterviewLanguage::Hindi);
        session.record_assistant_turn("Hello!").unwrap();

        let json = serde_json::to_value(InterviewResponse::from(&session)).unwrap();

        assert_eq!(json["language"], "Hindi");
        assert_eq!(json["phase"], "greeting");
        assert_eq!(json["sentiment"], "Neutral");
        assert_eq!(json["turns"][0]["role"], "assistant");
        assert_eq!(json["turns"][0]["content"], "Hello!");
    }

    #[test]
    fn turn_response_omits_absent_fields() {
        let response = TurnResponse {
            reply: "Bye".into(),
            phase: InterviewPhase::Ended,
            sentiment: Sentiment::Neutral,
            transitioned_to_technical: false,
            interview_ended: true,
            transcript_saved: false,
            persistence_error: None,
            usage: None,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("persistence_error").is_none());
        assert!(json.get("usage").is_none());
        assert_eq!(json["phase"], "ended");
    }

    #[test]
    fn rate_limited_error_carries_hint() {
        let error = ErrorResponse::rate_limited("busy", 60);
        assert_eq!(error.code, "RATE_LIMITED");
        assert_eq!(error.details.unwrap()["retry_after_secs"], 60);
    }
}
