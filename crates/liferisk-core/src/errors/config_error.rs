use super::error_code::{self, LifeRiskErrorCode};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl LifeRiskErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CONFIG_NOT_FOUND,
            Self::ParseError { .. } => error_code::CONFIG_PARSE_ERROR,
            Self::ValidationFailed { .. } => error_code::CONFIG_INVALID,
        }
    }
}
