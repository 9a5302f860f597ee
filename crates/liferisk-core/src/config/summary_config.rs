use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative-text summarization service configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Request a summary at all. Disabled means offline mode.
    pub enabled: bool,
    /// API base URL.
    pub endpoint: String,
    /// Model resource name, e.g. `models/gemini-1.5-flash`.
    pub model: String,
    /// API key. Falls back to `LIFERISK_GEMINI_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first attempt on network errors and 5xx responses.
    pub max_retries: u32,
    /// First retry delay in milliseconds, doubled per retry.
    pub initial_backoff_ms: u64,
}

impl SummaryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    /// Configured key, or the one from the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(defaults::API_KEY_ENV_VAR).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

impl fmt::Debug for SummaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryConfig")
            .field("enabled", &self.enabled)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("initial_backoff_ms", &self.initial_backoff_ms)
            .finish()
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SUMMARY_ENABLED,
            endpoint: defaults::DEFAULT_SUMMARY_ENDPOINT.to_string(),
            model: defaults::DEFAULT_SUMMARY_MODEL.to_string(),
            api_key: None,
            timeout_secs: defaults::DEFAULT_SUMMARY_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_SUMMARY_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_SUMMARY_INITIAL_BACKOFF_MS,
        }
    }
}
