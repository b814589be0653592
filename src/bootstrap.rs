//! Wiring shared by the binaries: logging setup and controller assembly.

use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::adapters::ai::{GeminiConfig, GeminiProvider};
use crate::adapters::sentiment::LexiconSentimentAnalyzer;
use crate::adapters::transcript::FileTranscriptStore;
use crate::application::{ControllerConfig, InterviewController};
use crate::config::{AiConfig, AppConfig};
use crate::ports::AIError;

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_filter`. Does nothing if a subscriber is
/// already installed.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Gateway settings derived from configuration.
///
/// Returns `None` when no API key is configured.
pub fn gemini_config(ai: &AiConfig) -> Option<GeminiConfig> {
    use secrecy::ExposeSecret;

    let key = ai.gemini_api_key.as_ref()?;
    Some(
        GeminiConfig::new(key.expose_secret().clone())
            .with_model(&ai.model)
            .with_base_url(&ai.base_url)
            .with_timeout(ai.timeout())
            .with_max_retries(ai.max_retries)
            .with_default_retry_after(ai.rate_limit_retry_secs),
    )
}

pub fn controller_config(ai: &AiConfig) -> ControllerConfig {
    ControllerConfig {
        temperature: ai.temperature,
        rate_limit_retry_secs: ai.rate_limit_retry_secs,
        ..ControllerConfig::default()
    }
}

/// Assembles the controller with the Gemini gateway, the lexicon analyzer
/// and the file transcript store.
pub fn build_controller(config: &AppConfig) -> Result<InterviewController, AIError> {
    let gemini = gemini_config(&config.ai).ok_or(AIError::AuthenticationFailed)?;
    let provider = GeminiProvider::new(gemini)?;

    tracing::info!(
        model = %config.ai.model,
        transcript_path = %config.interview.transcript_path.display(),
        "Interview controller configured"
    );

    Ok(InterviewController::new(
        Arc::new(provider),
        Arc::new(LexiconSentimentAnalyzer::new()),
        Arc::new(FileTranscriptStore::new(&config.interview.transcript_path)),
        controller_config(&config.ai),
    ))
}
