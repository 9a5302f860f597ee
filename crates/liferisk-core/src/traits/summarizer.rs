use crate::errors::SummaryError;

/// Turns a prompt into free text. The response is opaque to LifeRisk.
pub trait ISummarizer: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Submit `prompt` and return the generated text.
    fn summarize(&self, prompt: &str) -> Result<String, SummaryError>;
}
