//! Control signals embedded in conversation text.
//!
//! Two directions:
//! - candidate text may contain an exit keyword, which ends the interview
//!   without consulting the language model;
//! - model replies may carry literal markers that move the interview forward.
//!
//! Markers are matched as exact, case-sensitive substrings. A reply that
//! happens to quote a marker verbatim will trigger it; there is no escaping.

/// Marker emitted by the model once every profile field has been collected.
pub const TRANSITION_MARKER: &str = "TRANSITION_TO_TECH";

/// Marker emitted by the model at the end of its final technical question round.
pub const END_MARKER: &str = "END_INTERVIEW";

/// Words that end the interview when found anywhere in a candidate message.
pub const EXIT_KEYWORDS: [&str; 5] = ["quit", "exit", "goodbye", "bye", "stop"];

/// Returns true if `text` contains any exit keyword, ignoring case.
///
/// Matching is by substring, so "Goodbye!" and "I want to STOP" both match.
pub fn contains_exit_keyword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EXIT_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Markers found in a model reply, plus the reply with markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSignals {
    /// The reply as shown to the candidate and stored in history.
    pub display_text: String,
    /// `TRANSITION_TO_TECH` was present.
    pub transition_to_technical: bool,
    /// `END_INTERVIEW` was present.
    pub end_interview: bool,
}

impl ControlSignals {
    /// Scans a reply for both markers independently and strips them.
    ///
    /// Stripping is a pure text transform: every occurrence is removed and
    /// the result is trimmed, whatever the current phase.
    pub fn scan(reply: &str) -> Self {
        let transition_to_technical = reply.contains(TRANSITION_MARKER);
        let end_interview = reply.contains(END_MARKER);

        let mut display_text = reply.to_string();
        if transition_to_technical {
            display_text = display_text.replace(TRANSITION_MARKER, "").trim().to_string();
        }
        if end_interview {
            display_text = display_text.replace(END_MARKER, "").trim().to_string();
        }

        Self {
            display_text,
            transition_to_technical,
            end_interview,
        }
    }

    /// Returns true if any marker was found.
    pub fn has_markers(&self) -> bool {
        self.transition_to_technical || self.end_interview
    }
}
