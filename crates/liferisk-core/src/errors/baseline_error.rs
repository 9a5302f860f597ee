use super::error_code::{self, LifeRiskErrorCode};

/// Reference dataset loading errors. Lookups themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum BaselineError {
    #[error("cannot read dataset {path}: {reason}")]
    DatasetUnreadable { path: String, reason: String },

    #[error("dataset is missing required column: {column}")]
    MissingColumn { column: String },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

impl LifeRiskErrorCode for BaselineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DatasetUnreadable { .. } => error_code::DATASET_UNREADABLE,
            Self::MissingColumn { .. } => error_code::MISSING_COLUMN,
            Self::MalformedRecord { .. } => error_code::MALFORMED_RECORD,
        }
    }
}
