//! Transcript Store Adapters.
//!
//! - `FileTranscriptStore` - JSON file on disk, rewritten whole on each append
//! - `InMemoryTranscriptStore` - process-local, for tests and development

mod file_transcript_store;
mod in_memory_transcript_store;

pub use file_transcript_store::FileTranscriptStore;
pub use in_memory_transcript_store::InMemoryTranscriptStore;
