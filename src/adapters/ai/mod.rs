//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! - `GeminiProvider` - Google Gemini models via the `generateContent` endpoint
//! - `MockAIProvider` - Scripted provider for tests and offline runs

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
