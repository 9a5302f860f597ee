pub mod risk_engine;
pub mod summarizer;

pub use risk_engine::IRiskEngine;
pub use summarizer::ISummarizer;
