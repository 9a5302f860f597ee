//! # liferisk-summary
//!
//! Narrative analysis of an assessment. Builds the analysis prompt, sends it
//! to a generative-text service, and degrades to a fixed note when the
//! service is unavailable. The returned text is never interpreted.

pub mod analysis;
pub mod gemini;
pub mod prompt;
pub mod static_summarizer;

pub use analysis::{analysis_or_fallback, build_summarizer, generate_analysis, UNAVAILABLE_NOTE};
pub use gemini::{GeminiClient, GeminiClientConfig};
pub use prompt::build_prompt;
pub use static_summarizer::StaticSummarizer;
