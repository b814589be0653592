//! Transcript Store Port - durable, append-only storage of finished interviews.

use async_trait::async_trait;

use crate::domain::interview::{Sentiment, TranscriptRecord, Turn};

/// Errors that can occur during transcript persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize transcripts: {0}")]
    SerializationFailed(String),

    #[error("Stored transcripts are unreadable: {0}")]
    Corrupt(String),
}

/// Port for persisting completed interviews.
///
/// Appends never remove or rewrite earlier records, and concurrent appends
/// are serialized so that none is lost.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Persists a new record stamped with the current time.
    ///
    /// # Errors
    /// Returns `TranscriptStoreError` if the storage cannot be read or written.
    async fn append(
        &self,
        turns: &[Turn],
        final_sentiment: Sentiment,
    ) -> Result<TranscriptRecord, TranscriptStoreError>;

    /// Loads every stored record in append order.
    async fn load_all(&self) -> Result<Vec<TranscriptRecord>, TranscriptStoreError>;
}
