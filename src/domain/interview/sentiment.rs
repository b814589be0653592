//! Candidate sentiment classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity above which a turn counts as positive (exclusive).
pub const POSITIVE_THRESHOLD: f64 = 0.2;

/// Polarity below which a turn counts as negative (exclusive).
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Classification of the latest candidate turn.
///
/// Overwritten on every analyzed turn; never aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Classifies a polarity score in `[-1, 1]`.
    ///
    /// Both thresholds are exclusive: exactly `0.2` or `-0.2` is `Neutral`.
    pub fn from_polarity(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Label with an emoji, for recruiter dashboards.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive 🙂",
            Self::Negative => "Negative 😟",
            Self::Neutral => "Neutral 😐",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
