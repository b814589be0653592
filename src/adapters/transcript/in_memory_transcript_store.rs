//! In-Memory Transcript Store Adapter
//!
//! Keeps records in process memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::interview::{Sentiment, TranscriptRecord, Turn};
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// In-memory transcript storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranscriptStore {
    records: Arc<RwLock<Vec<TranscriptRecord>>>,
    failure: Option<TranscriptStoreError>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every append fails with `error`.
    pub fn failing(error: TranscriptStoreError) -> Self {
        Self {
            records: Arc::default(),
            failure: Some(error),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Remove every record (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn append(
        &self,
        turns: &[Turn],
        final_sentiment: Sentiment,
    ) -> Result<TranscriptRecord, TranscriptStoreError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let record = TranscriptRecord::new(turns, final_sentiment);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn load_all(&self) -> Result<Vec<TranscriptRecord>, TranscriptStoreError> {
        Ok(self.records.read().await.clone())
    }
}
