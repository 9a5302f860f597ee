use liferisk_core::config::SummaryConfig;
use liferisk_core::errors::SummaryError;
use liferisk_core::models::{LifeExpectancyEstimate, RiskResult, UserProfile};
use liferisk_core::traits::ISummarizer;
use liferisk_core::tracing::events;

use crate::gemini::GeminiClient;
use crate::prompt::build_prompt;
use crate::static_summarizer::StaticSummarizer;

/// Report text used in place of an analysis that could not be generated.
pub const UNAVAILABLE_NOTE: &str = "AI analysis unavailable";

/// The summarizer for this run: static when offline or disabled, otherwise
/// the HTTP client.
pub fn build_summarizer(
    config: &SummaryConfig,
) -> Result<Box<dyn ISummarizer>, SummaryError> {
    if !config.enabled {
        return Ok(Box::new(StaticSummarizer::offline()));
    }
    Ok(Box::new(GeminiClient::from_summary_config(config)?))
}

/// Request an analysis of one assessment.
pub fn generate_analysis(
    summarizer: &dyn ISummarizer,
    profile: &UserProfile,
    risks: &RiskResult,
    life_expectancy: &LifeExpectancyEstimate,
) -> Result<String, SummaryError> {
    let prompt = build_prompt(profile, risks, life_expectancy);
    events::summary_requested(summarizer.name(), prompt.chars().count());
    summarizer.summarize(&prompt)
}

/// Like [`generate_analysis`], but a failure yields the unavailable note.
pub fn analysis_or_fallback(
    summarizer: &dyn ISummarizer,
    profile: &UserProfile,
    risks: &RiskResult,
    life_expectancy: &LifeExpectancyEstimate,
) -> String {
    match generate_analysis(summarizer, profile, risks, life_expectancy) {
        Ok(text) => text,
        Err(e) => {
            events::degradation_triggered("summary", &e.to_string(), "unavailable note");
            format!("{UNAVAILABLE_NOTE} ({e}).")
        }
    }
}
