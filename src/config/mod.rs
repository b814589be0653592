//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `HIRING_ASSISTANT`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use hiring_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod interview;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use interview::InterviewConfig;
pub use server::{Environment, ServerConfig};

use secrecy::Secret;
use serde::Deserialize;

/// Plain variable accepted for the API key when the prefixed one is unset.
pub const API_KEY_FALLBACK_VAR: &str = "GEMINI_API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Language model configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Interview defaults and transcript storage
    #[serde(default)]
    pub interview: InterviewConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HIRING_ASSISTANT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `GEMINI_API_KEY` for the API key
    ///
    /// # Environment Variable Format
    ///
    /// - `HIRING_ASSISTANT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HIRING_ASSISTANT__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `HIRING_ASSISTANT__INTERVIEW__DEFAULT_LANGUAGE=spanish`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HIRING_ASSISTANT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if config.ai.gemini_api_key.is_none() {
            config.ai.gemini_api_key = std::env::var(API_KEY_FALLBACK_VAR).ok().map(Secret::new);
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.interview.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
