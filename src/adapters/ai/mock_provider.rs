//! Mock AI Provider for testing.
//!
//! Scripted replies and failures, consumed in order, with call recording
//! so tests can assert exactly what the controller sent.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("Great, thanks! TRANSITION_TO_TECH")
//!     .with_error(MockError::RateLimited { retry_after_secs: 60 });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success { content: String, usage: TokenUsage },
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queues a response on an already shared provider.
    pub fn push_response(&self, content: impl Into<String>) {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
        });
    }

    /// Queues an error on an already shared provider.
    pub fn push_error(&self, error: MockError) {
        lock(&self.responses).push_back(MockResponse::Error(error));
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    pub fn last_call(&self) -> Option<CompletionRequest> {
        lock(&self.calls).last().cloned()
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                usage: TokenUsage::new(5, 10),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success { content, usage } => Ok(CompletionResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace-123"))
            .with_message(MessageRole::User, "Hello")
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new().with_response("First").with_response("Second");

        let r1 = provider.complete(test_request()).await.unwrap();
        let r2 = provider.complete(test_request()).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
        assert_eq!(r1.model, "mock-model-1");
    }

    #[tokio::test]
    async fn mock_provider_returns_default_after_exhausted() {
        let provider = MockAIProvider::new().with_response("Only one");

        provider.complete(test_request()).await.unwrap();
        let r2 = provider.complete(test_request()).await.unwrap();

        assert_eq!(r2.content, "Mock response");
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider =
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = provider.complete(test_request()).await.unwrap_err();

        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockAIProvider::new();
        assert_eq!(provider.call_count(), 0);

        provider.complete(test_request()).await.unwrap();
        provider.complete(test_request()).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_call().unwrap().messages[0].content, "Hello");
    }

    #[tokio::test]
    async fn pushed_responses_are_shared_across_clones() {
        let provider = MockAIProvider::new();
        let clone = provider.clone();
        clone.push_response("from clone");

        let response = provider.complete(test_request()).await.unwrap();
        assert_eq!(response.content, "from clone");
        assert_eq!(clone.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_provider_respects_delay() {
        let provider = MockAIProvider::new()
            .with_response("Delayed")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(test_request()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
