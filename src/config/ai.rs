//! Language model configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound accepted for `max_retries`
pub const MAX_RETRIES_LIMIT: u32 = 5;

/// Gemini gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key (falls back to plain `GEMINI_API_KEY`)
    pub gemini_api_key: Option<Secret<String>>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Wait hint when a rate-limit response carries none
    #[serde(default = "default_rate_limit_retry")]
    pub rate_limit_retry_secs: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyValue("ai.model"));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidUrl("ai.base_url"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > MAX_RETRIES_LIMIT {
            return Err(ValidationError::TooManyRetries {
                value: self.max_retries,
                max: MAX_RETRIES_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            rate_limit_retry_secs: default_rate_limit_retry(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_temperature() -> f32 {
    0.4
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    2
}

fn default_rate_limit_retry() -> u32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key() -> AiConfig {
        AiConfig {
            gemini_api_key: Some(Secret::new("AIza-test".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.temperature, 0.4);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.rate_limit_retry_secs, 60);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_requires_key() {
        assert_eq!(
            AiConfig::default().validate(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        );

        let blank = AiConfig {
            gemini_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(with_key().validate().is_ok());
    }

    #[test]
    fn test_validation_temperature_range() {
        let config = AiConfig {
            temperature: 2.5,
            ..with_key()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));
    }

    #[test]
    fn test_validation_base_url() {
        let config = AiConfig {
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..with_key()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUrl("ai.base_url")));
    }

    #[test]
    fn test_validation_retry_ceiling() {
        let at_limit = AiConfig {
            max_retries: MAX_RETRIES_LIMIT,
            ..with_key()
        };
        assert!(at_limit.validate().is_ok());

        let config = AiConfig {
            max_retries: 64,
            ..with_key()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::TooManyRetries { value: 64, max: MAX_RETRIES_LIMIT })
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        assert!(!format!("{:?}", with_key()).contains("AIza-test"));
    }
}
