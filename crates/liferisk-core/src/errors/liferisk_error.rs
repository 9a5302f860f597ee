use super::error_code::LifeRiskErrorCode;
use super::{
    BaselineError, ConfigError, ProfileError, ReportError, ScoringError, SummaryError,
};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum LifeRiskError {
    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("baseline error: {0}")]
    Baseline(#[from] BaselineError),

    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("summary error: {0}")]
    Summary(#[from] SummaryError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

impl LifeRiskErrorCode for LifeRiskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring(e) => e.error_code(),
            Self::Baseline(e) => e.error_code(),
            Self::Profile(e) => e.error_code(),
            Self::Summary(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}

pub type LifeRiskResult<T> = Result<T, LifeRiskError>;
