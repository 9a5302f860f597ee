use super::error_code::{self, LifeRiskErrorCode};

/// Profile input errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown {field} label: {value:?}")]
    UnknownLabel { field: &'static str, value: String },

    #[error("cannot parse profile {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}

impl LifeRiskErrorCode for ProfileError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => error_code::OUT_OF_RANGE,
            Self::UnknownLabel { .. } => error_code::UNKNOWN_LABEL,
            Self::ParseFailed { .. } => error_code::PROFILE_PARSE_FAILED,
        }
    }
}
