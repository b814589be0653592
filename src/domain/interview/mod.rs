//! Interview domain module.
//!
//! Phases, turns, sentiment, control signals and prompt templates for the
//! conversational screening interview.

mod language;
mod phase;
pub mod prompts;
mod sentiment;
mod session;
pub mod signals;
mod transcript;
mod turn;

pub use language::InterviewLanguage;
pub use phase::InterviewPhase;
pub use prompts::{build_instructions, greeting_message, FAREWELL_MESSAGE, REQUIRED_FIELDS,
    TECHNICAL_TRANSITION_MESSAGE,
};
pub use sentiment::{Sentiment, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use session::{InterviewSession, SessionError};
pub use signals::{contains_exit_keyword, ControlSignals, END_MARKER, TRANSITION_MARKER};
pub use transcript::{TranscriptEntry, TranscriptRecord, TranscriptRole};
pub use turn::{Turn, TurnRole};
