//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! Uses the non-streaming `generateContent` endpoint. The system instruction
//! travels in `systemInstruction`; assistant turns use the `model` role.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// Retry hint used when a 429 response carries no `retryDelay`.
    pub default_retry_after_secs: u32,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 2,
            default_retry_after_secs: 60,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_default_retry_after(mut self, secs: u32) -> Self {
        self.default_retry_after_secs = secs;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let body = to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_status(
                status.as_u16(),
                &error_body,
                self.config.default_retry_after_secs,
            ));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        into_completion(body, &self.config.model)
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let mut retry_count = 0;

        loop {
            let result = match self.send_request(&request).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(completion) => return Ok(completion),
                Err(err) if !err.is_retryable() || retry_count >= self.config.max_retries => {
                    return Err(err);
                }
                Err(err) => {
                    tracing::debug!(
                        trace_id = %request.metadata.trace_id,
                        attempt = retry_count + 1,
                        "Gemini request failed, retrying: {}",
                        err
                    );
                }
            }

            sleep(backoff_delay(retry_count)).await;
            retry_count += 1;
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

/// Longest pause between retries.
const MAX_BACKOFF_SECS: u64 = 30;

/// Exponential backoff: 1s, 2s, 4s, ... capped at `MAX_BACKOFF_SECS`.
fn backoff_delay(retry_count: u32) -> Duration {
    let secs = 1u64.checked_shl(retry_count).unwrap_or(u64::MAX);
    Duration::from_secs(secs.min(MAX_BACKOFF_SECS))
}

// ════════════════════════════════════════════════════════════════════════════
// Wire mapping
// ════════════════════════════════════════════════════════════════════════════

fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
    let contents = request
        .messages
        .iter()
        .map(|msg| GeminiContent {
            role: match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            }
            .to_string(),
            parts: vec![GeminiPart::text(&msg.content)],
        })
        .collect();

    GeminiRequest {
        contents,
        system_instruction: request.system_prompt.as_ref().map(|prompt| GeminiInstruction {
            parts: vec![GeminiPart::text(prompt)],
        }),
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    }
}

/// Maps a non-success HTTP status to a gateway error.
fn classify_status(status: u16, error_body: &str, default_retry_after: u32) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(parse_retry_after(error_body).unwrap_or(default_retry_after)),
        400 => AIError::InvalidRequest(error_message(error_body)),
        500..=599 => AIError::unavailable(format!(
            "Server error {}: {}",
            status,
            error_message(error_body)
        )),
        _ => AIError::network(format!(
            "Unexpected status {}: {}",
            status,
            error_message(error_body)
        )),
    }
}

/// Extracts `error.message` from a Google API error body, or returns the body.
fn error_message(error_body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| error_body.to_string())
}

/// Reads `retryDelay` (e.g. `"37s"` or `"1.5s"`) from a RetryInfo detail.
fn parse_retry_after(error_body: &str) -> Option<u32> {
    let parsed: serde_json::Value = serde_json::from_str(error_body).ok()?;
    let details = parsed.get("error")?.get("details")?.as_array()?;

    details.iter().find_map(|detail| {
        let delay = detail.get("retryDelay")?.as_str()?;
        let secs: f64 = delay.trim_end_matches('s').parse().ok()?;
        Some(secs.ceil().max(0.0) as u32)
    })
}

fn into_completion(body: GeminiResponse, model: &str) -> Result<CompletionResponse, AIError> {
    let usage = body
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    let Some(candidate) = body.candidates.into_iter().next() else {
        if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AIError::content_filtered(reason));
        }
        return Err(AIError::parse("No candidates in response"));
    };

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
            FinishReason::ContentFilter
        }
        _ => FinishReason::Stop,
    };

    let content: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(match finish_reason {
            FinishReason::ContentFilter => AIError::content_filtered(
                candidate.finish_reason.unwrap_or_else(|| "SAFETY".to_string()),
            ),
            _ => AIError::parse("Response contained no text"),
        });
    }

    Ok(CompletionResponse {
        content,
        usage,
        model: body.model_version.unwrap_or_else(|| model.to_string()),
        finish_reason,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Gemini API types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiInstruction>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl GeminiPart {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}
