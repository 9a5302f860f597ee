use super::error_code::{self, LifeRiskErrorCode};

/// Summarization service errors.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("summarization is disabled")]
    Disabled,

    #[error("no API key configured for the summarization service")]
    MissingApiKey,

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("summarization service returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("summarization service returned no text")]
    EmptyResponse,
}

impl LifeRiskErrorCode for SummaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Disabled => error_code::SUMMARY_DISABLED,
            Self::MissingApiKey => error_code::MISSING_API_KEY,
            Self::Network { .. } => error_code::NETWORK_ERROR,
            Self::Rejected { .. } => error_code::PROVIDER_REJECTED,
            Self::EmptyResponse => error_code::EMPTY_RESPONSE,
        }
    }
}
