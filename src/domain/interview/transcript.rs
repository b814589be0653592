//! Persisted interview transcripts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::sentiment::Sentiment;
use super::turn::{Turn, TurnRole};

/// Role label used in stored transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptRole {
    User,
    Model,
}

impl From<TurnRole> for TranscriptRole {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => Self::User,
            TurnRole::Assistant => Self::Model,
        }
    }
}

/// One line of a stored transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: TranscriptRole,
    pub content: String,
}

impl From<&Turn> for TranscriptEntry {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role().into(),
            content: turn.content().to_string(),
        }
    }
}

/// A completed interview, written once and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub timestamp: Timestamp,
    pub final_sentiment: Sentiment,
    pub transcript: Vec<TranscriptEntry>,
}

impl TranscriptRecord {
    /// Builds a record stamped with the current time.
    pub fn new(turns: &[Turn], final_sentiment: Sentiment) -> Self {
        Self {
            timestamp: Timestamp::now(),
            final_sentiment,
            transcript: turns.iter().map(TranscriptEntry::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_maps_assistant_to_model() {
        let turns = vec![Turn::assistant("Hello"), Turn::user("Hi")];
        let record = TranscriptRecord::new(&turns, Sentiment::Positive);

        assert_eq!(record.len(), 2);
        assert_eq!(record.transcript[0].role, TranscriptRole::Model);
        assert_eq!(record.transcript[1].role, TranscriptRole::User);
    }

    #[test]
    fn record_serializes_to_storage_format() {
        let turns = vec![Turn::assistant("Hello"), Turn::user("Hi")];
        let record = TranscriptRecord::new(&turns, Sentiment::Neutral);
        let json = serde_json::to_value(&record).unwrap();

        assert!(json["timestamp"].is_string());
        assert_eq!(json["final_sentiment"], "Neutral");
        assert_eq!(json["transcript"][0]["role"], "model");
        assert_eq!(json["transcript"][0]["content"], "Hello");
        assert_eq!(json["transcript"][1]["role"], "user");
    }

    #[test]
    fn record_deserializes_from_storage_format() {
        let json = r#"{
            "timestamp": "2025-03-01T09:15:00Z",
            "final_sentiment": "Negative",
            "transcript": [{"role": "user", "content": "stop"}]
        }"#;
        let record: TranscriptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.final_sentiment, Sentiment::Negative);
        assert_eq!(record.transcript[0].content, "stop");
    }
}
