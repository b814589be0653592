//! Supported interview languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Language the assistant must conduct the whole interview in.
///
/// Parsing is case-insensitive; serialization uses the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum InterviewLanguage {
    #[default]
    English,
    Spanish,
    French,
    German,
    Hindi,
    Mandarin,
}

impl InterviewLanguage {
    /// All selectable languages, in menu order.
    pub const ALL: [InterviewLanguage; 6] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Hindi,
        Self::Mandarin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Hindi => "Hindi",
            Self::Mandarin => "Mandarin",
        }
    }
}

impl fmt::Display for InterviewLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterviewLanguage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "language",
                    format!("unsupported value '{}'", wanted),
                )
            })
    }
}

impl TryFrom<String> for InterviewLanguage {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InterviewLanguage> for String {
    fn from(lang: InterviewLanguage) -> Self {
        lang.name().to_string()
    }
}
