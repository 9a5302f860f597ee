use liferisk_core::errors::SummaryError;
use liferisk_core::traits::ISummarizer;

/// Returns the same text for every prompt. Used offline and in tests.
#[derive(Debug, Clone)]
pub struct StaticSummarizer {
    text: String,
}

impl StaticSummarizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The note used when no analysis service is configured.
    pub fn offline() -> Self {
        Self::new("AI analysis skipped: running in offline mode.")
    }
}

impl ISummarizer for StaticSummarizer {
    fn name(&self) -> &str {
        "static"
    }

    fn summarize(&self, _prompt: &str) -> Result<String, SummaryError> {
        Ok(self.text.clone())
    }
}
