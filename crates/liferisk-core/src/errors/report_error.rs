use super::error_code::{self, LifeRiskErrorCode};

/// Report output errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl LifeRiskErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WriteFailed { .. } => error_code::REPORT_WRITE_FAILED,
        }
    }
}
