//! Interview configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::interview::InterviewLanguage;

use super::error::ValidationError;

/// Interview behavior and storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// Language used when a session does not choose one
    #[serde(default)]
    pub default_language: InterviewLanguage,

    /// JSON file holding completed transcripts
    #[serde(default = "default_transcript_path")]
    pub transcript_path: PathBuf,

    /// Seconds an ended session stays readable before eviction
    #[serde(default = "default_ended_session_ttl")]
    pub ended_session_ttl_secs: u64,

    /// Seconds of inactivity before an open session is evicted
    #[serde(default = "default_idle_session_ttl")]
    pub idle_session_ttl_secs: u64,

    /// Seconds between eviction sweeps
    #[serde(default = "default_sweep_interval")]
    pub session_sweep_interval_secs: u64,
}

impl InterviewConfig {
    /// Validate interview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.transcript_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyValue("interview.transcript_path"));
        }
        if self.session_sweep_interval_secs == 0 {
            return Err(ValidationError::ZeroValue("interview.session_sweep_interval_secs"));
        }
        if self.idle_session_ttl_secs == 0 {
            return Err(ValidationError::ZeroValue("interview.idle_session_ttl_secs"));
        }
        Ok(())
    }

    pub fn ended_session_ttl(&self) -> Duration {
        Duration::from_secs(self.ended_session_ttl_secs)
    }

    pub fn idle_session_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_session_ttl_secs)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs)
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            default_language: InterviewLanguage::default(),
            transcript_path: default_transcript_path(),
            ended_session_ttl_secs: default_ended_session_ttl(),
            idle_session_ttl_secs: default_idle_session_ttl(),
            session_sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_transcript_path() -> PathBuf {
    PathBuf::from("simulated_backend_db.json")
}

fn default_ended_session_ttl() -> u64 {
    300
}

fn default_idle_session_ttl() -> u64 {
    3600
}

fn default_sweep_interval() -> u64 {
    60
}
