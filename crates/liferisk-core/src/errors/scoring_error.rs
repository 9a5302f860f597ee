use super::error_code::{self, LifeRiskErrorCode};

/// Risk scoring errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("disease not found in catalog: {key}")]
    DiseaseNotFound { key: String },
}

impl LifeRiskErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DiseaseNotFound { .. } => error_code::DISEASE_NOT_FOUND,
        }
    }
}
