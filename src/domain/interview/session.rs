//! Interview session aggregate.
//!
//! Owns the ordered history, the current phase, the latest sentiment and the
//! interview language. It is an explicit value passed to the controller on
//! every turn; nothing else mutates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

use super::language::InterviewLanguage;
use super::phase::InterviewPhase;
use super::sentiment::Sentiment;
use super::turn::Turn;

/// Errors raised by the session aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Interview session is closed")]
    Closed,

    #[error("Invalid phase transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

/// A single candidate's interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    id: SessionId,
    language: InterviewLanguage,
    phase: InterviewPhase,
    sentiment: Sentiment,
    turns: Vec<Turn>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl InterviewSession {
    /// Creates a fresh session: empty history, phase `Greeting`, sentiment `Neutral`.
    pub fn new(language: InterviewLanguage) -> Self {
        Self::with_id(SessionId::new(), language)
    }

    /// Creates a fresh session with a known identifier.
    pub fn with_id(id: SessionId, language: InterviewLanguage) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            language,
            phase: InterviewPhase::default(),
            sentiment: Sentiment::default(),
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn language(&self) -> InterviewLanguage {
        self.language
    }

    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// Chronological history, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true once the interview has ended. Closed sessions are read-only.
    pub fn is_closed(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns true if nothing has been said yet.
    pub fn is_fresh(&self) -> bool {
        self.phase == InterviewPhase::Greeting && self.turns.is_empty()
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Appends a candidate turn.
    pub fn record_user_turn(&mut self, content: impl Into<String>) -> Result<(), SessionError> {
        self.push(Turn::user(content))
    }

    /// Appends an assistant turn.
    pub fn record_assistant_turn(
        &mut self,
        content: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.push(Turn::assistant(content))
    }

    /// Overwrites the latest sentiment.
    pub fn set_sentiment(&mut self, sentiment: Sentiment) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.sentiment = sentiment;
        self.touch();
        Ok(())
    }

    /// Moves the interview forward. Backward and self transitions are rejected.
    pub fn advance_to(&mut self, target: InterviewPhase) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.phase = self.phase.transition_to(target)?;
        self.touch();
        Ok(())
    }

    fn push(&mut self, turn: Turn) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.turns.push(turn);
        self.touch();
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
