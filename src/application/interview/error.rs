//! Controller-level failures surfaced to the caller.

use thiserror::Error;

use crate::domain::interview::SessionError;
use crate::ports::AIError;

/// Errors that can occur while driving an interview.
///
/// None of these leaves the session inconsistent: the candidate's message is
/// either recorded or rejected before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterviewError {
    /// The interview already ended; nothing was changed.
    #[error("The interview has ended. Start a new session to continue.")]
    SessionClosed,

    /// Message content is empty or whitespace only.
    #[error("Message content cannot be empty")]
    EmptyMessage,

    /// The language model refused for quota or rate reasons.
    #[error("The assistant is busy. Please wait {retry_after_secs} seconds and send your message again.")]
    RateLimited { retry_after_secs: u32 },

    /// Any other language model failure.
    #[error("The assistant could not respond: {detail}")]
    TransientError { detail: String },

    /// The session rejected a mutation the controller expected to be legal.
    #[error("Invalid session state: {0}")]
    InvalidState(String),
}

impl InterviewError {
    /// Maps a gateway failure onto `RateLimited` or `TransientError`.
    ///
    /// A typed rate-limit error keeps its own hint; a failure that only
    /// mentions rate limiting in its detail gets `default_retry_after_secs`.
    pub fn from_gateway(err: &AIError, default_retry_after_secs: u32) -> Self {
        match err {
            AIError::RateLimited { retry_after_secs } => Self::RateLimited {
                retry_after_secs: *retry_after_secs,
            },
            other if other.indicates_rate_limit() => Self::RateLimited {
                retry_after_secs: default_retry_after_secs,
            },
            other => Self::TransientError {
                detail: other.to_string(),
            },
        }
    }

    /// Returns true if the candidate can resend the same message.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::TransientError { .. })
    }
}

impl From<SessionError> for InterviewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Closed => Self::SessionClosed,
            SessionError::InvalidTransition(e) => Self::InvalidState(e.to_string()),
        }
    }
}
