//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the interview domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Language model gateway
//! - `SentimentAnalyzer` - Polarity scoring of candidate turns
//! - `TranscriptStore` - Append-only storage of finished interviews

mod ai_provider;
mod sentiment_analyzer;
mod transcript_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use sentiment_analyzer::SentimentAnalyzer;
pub use transcript_store::{TranscriptStore, TranscriptStoreError};
