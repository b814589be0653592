//! File-based Transcript Store Adapter
//!
//! Keeps every finished interview in a single JSON array. Each append reads
//! the whole collection, pushes the new record and writes everything back
//! through a sibling temp file that is renamed over the target.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::interview::{Sentiment, TranscriptRecord, Turn};
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// JSON-file transcript storage with a single-writer lock.
#[derive(Debug, Clone)]
pub struct FileTranscriptStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileTranscriptStore {
    /// Create a store backed by the given file.
    ///
    /// The file does not need to exist yet.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileTranscriptStore::new("simulated_backend_db.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "transcripts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_records(&self) -> Result<Vec<TranscriptRecord>, TranscriptStoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TranscriptStoreError::Io(e.to_string())),
        };

        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&json).map_err(|e| TranscriptStoreError::Corrupt(e.to_string()))
    }

    async fn write_records(&self, records: &[TranscriptRecord]) -> Result<(), TranscriptStoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| TranscriptStoreError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| TranscriptStoreError::Io(e.to_string()))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| TranscriptStoreError::Io(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| TranscriptStoreError::Io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TranscriptStore for FileTranscriptStore {
    async fn append(
        &self,
        turns: &[Turn],
        final_sentiment: Sentiment,
    ) -> Result<TranscriptRecord, TranscriptStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        let record = TranscriptRecord::new(turns, final_sentiment);
        records.push(record.clone());
        self.write_records(&records).await?;

        tracing::debug!(
            path = %self.path.display(),
            total = records.len(),
            "Transcript appended"
        );

        Ok(record)
    }

    async fn load_all(&self) -> Result<Vec<TranscriptRecord>, TranscriptStoreError> {
        let _guard = self.write_lock.lock().await;
        self.read_records().await
    }
}
