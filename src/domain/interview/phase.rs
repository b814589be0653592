//! Interview phases.
//!
//! The phase decides which instructions the language model receives and
//! whether the session still accepts candidate turns.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The current phase of a screening interview.
///
/// Phases only ever move forward:
/// `Greeting` → `Gathering` → `TechnicalAssessment` → `Ended`,
/// with a direct jump to `Ended` whenever the candidate leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    /// Session created, greeting not yet emitted.
    Greeting,

    /// Collecting the candidate's profile fields.
    Gathering,

    /// Asking technical questions derived from the stated tech stack.
    TechnicalAssessment,

    /// Interview concluded. Terminal.
    Ended,
}

impl InterviewPhase {
    /// Returns a label suitable for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "Waiting to Start",
            Self::Gathering => "Phase 1 - Gathering Details",
            Self::TechnicalAssessment => "Phase 2 - Technical Assessment",
            Self::Ended => "Interview Concluded",
        }
    }

    /// Position in the forward ordering of phases.
    fn rank(&self) -> u8 {
        match self {
            Self::Greeting => 0,
            Self::Gathering => 1,
            Self::TechnicalAssessment => 2,
            Self::Ended => 3,
        }
    }

    /// Returns all phases reachable in one step from this phase.
    pub fn valid_next_phases(&self) -> Vec<Self> {
        match self {
            Self::Greeting => vec![Self::Gathering, Self::TechnicalAssessment, Self::Ended],
            Self::Gathering => vec![Self::TechnicalAssessment, Self::Ended],
            Self::TechnicalAssessment => vec![Self::Ended],
            Self::Ended => vec![],
        }
    }

    /// Returns true if transition to target phase is valid.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_next_phases().contains(target)
    }

    /// Performs a validated transition.
    pub fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "phase",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Returns true once the interview has concluded.
    pub fn is_terminal(&self) -> bool {
        self.valid_next_phases().is_empty()
    }

    /// Returns true if a `TRANSITION_TO_TECH` marker may act in this phase.
    pub fn accepts_technical_transition(&self) -> bool {
        matches!(self, Self::Greeting | Self::Gathering)
    }

    /// Returns true if `other` comes strictly after this phase.
    pub fn precedes(&self, other: &Self) -> bool {
        self.rank() < other.rank()
    }
}

impl Default for InterviewPhase {
    fn default() -> Self {
        Self::Greeting
    }
}

impl fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::Gathering => "gathering",
            Self::TechnicalAssessment => "technical_assessment",
            Self::Ended => "ended",
        };
        write!(f, "{}", s)
    }
}
