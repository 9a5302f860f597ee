//! Generative Language API client with retry, exponential backoff, timeout,
//! and gzip compression.

use std::fmt;
use std::time::Duration;

use liferisk_core::config::SummaryConfig;
use liferisk_core::errors::SummaryError;
use liferisk_core::traits::ISummarizer;
use serde::{Deserialize, Serialize};

/// Header carrying the API key. Keeps the key out of URLs and logs.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClientConfig {
    /// API base URL, without a trailing slash.
    pub endpoint: String,
    /// Model resource name, e.g. `models/gemini-1.5-flash`.
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// First retry delay (doubles each retry).
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("initial_backoff", &self.initial_backoff)
            .field("max_backoff", &self.max_backoff)
            .finish()
    }
}

impl GeminiClientConfig {
    /// Client settings from the summary config. Fails when summarization is
    /// disabled or no API key can be found.
    pub fn from_summary_config(config: &SummaryConfig) -> Result<Self, SummaryError> {
        if !config.enabled {
            return Err(SummaryError::Disabled);
        }
        let api_key = config
            .resolved_api_key()
            .ok_or(SummaryError::MissingApiKey)?;
        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            timeout: config.timeout(),
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff(),
            max_backoff: Duration::from_secs(30),
        })
    }

    /// `{endpoint}/{model}:generateContent`.
    pub fn generate_url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }
}

// ── Wire types ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated.
    pub fn into_text(self) -> Result<String, SummaryError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            Err(SummaryError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

// ── Client ──────────────────────────────────────────────────────────────

/// Blocking client for the `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiClient {
    config: GeminiClientConfig,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, SummaryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| SummaryError::Network {
                reason: e.to_string(),
            })?;
        Ok(Self { config, http })
    }

    pub fn from_summary_config(config: &SummaryConfig) -> Result<Self, SummaryError> {
        Self::new(GeminiClientConfig::from_summary_config(config)?)
    }

    pub fn config(&self) -> &GeminiClientConfig {
        &self.config
    }

    /// POST the prompt, retrying network errors and 5xx responses.
    /// 4xx responses are returned immediately.
    fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        let url = self.config.generate_url();
        let body = GenerateContentRequest::from_prompt(prompt);

        let mut backoff = self.config.initial_backoff;
        let mut last_err = SummaryError::Network {
            reason: "no attempt made".to_string(),
        };

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "gemini: retry attempt {}/{} after {:?}",
                    attempt,
                    self.config.max_retries,
                    backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let sent = self
                .http
                .post(&url)
                .header(API_KEY_HEADER, &self.config.api_key)
                .json(&body)
                .send();

            match sent {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        let parsed = resp.json::<GenerateContentResponse>().map_err(|e| {
                            SummaryError::Network {
                                reason: format!("deserialization failed: {e}"),
                            }
                        })?;
                        return parsed.into_text();
                    }
                    let body_text = resp.text().unwrap_or_default();
                    let err = SummaryError::Rejected {
                        status: status.as_u16(),
                        body: body_text,
                    };
                    if status.is_client_error() {
                        return Err(err);
                    }
                    last_err = err;
                }
                Err(e) => {
                    last_err = SummaryError::Network {
                        reason: e.to_string(),
                    };
                }
            }
        }

        Err(last_err)
    }
}

impl ISummarizer for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
        self.generate(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_config(api_key: Option<&str>) -> SummaryConfig {
        SummaryConfig {
            api_key: api_key.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let mut config = summary_config(Some("k"));
        config.endpoint = "https://example.test/v1beta/".to_string();
        let client_config = GeminiClientConfig::from_summary_config(&config).unwrap();
        assert_eq!(
            client_config.generate_url(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config =
            GeminiClientConfig::from_summary_config(&summary_config(Some("sk-secret-123")))
                .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret-123"));
        assert!(debug.contains("api_key: \"<redacted>\""));

        let client = GeminiClient::new(config).unwrap();
        assert!(!format!("{client:?}").contains("sk-secret-123"));
    }

    #[test]
    fn disabled_config_is_rejected() {
        let mut config = summary_config(Some("k"));
        config.enabled = false;
        assert!(matches!(
            GeminiClientConfig::from_summary_config(&config),
            Err(SummaryError::Disabled)
        ));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = summary_config(Some("   "));
        assert!(matches!(
            GeminiClientConfig::from_summary_config(&config),
            Err(SummaryError::MissingApiKey)
        ));
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateContentRequest::from_prompt("hello");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn response_parts_are_concatenated() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Risk is "},{"text":"moderate."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.into_text().unwrap(), "Risk is moderate.");
    }

    #[test]
    fn blocked_response_is_empty() {
        let resp: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(resp.into_text(), Err(SummaryError::EmptyResponse)));
    }
}
