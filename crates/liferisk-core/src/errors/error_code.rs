//! Stable machine-readable error codes.

/// Implemented by every LifeRisk error enum.
pub trait LifeRiskErrorCode {
    /// Stable code for programmatic handling, e.g. `DISEASE_NOT_FOUND`.
    fn error_code(&self) -> &'static str;
}

pub const DISEASE_NOT_FOUND: &str = "DISEASE_NOT_FOUND";
pub const DATASET_UNREADABLE: &str = "DATASET_UNREADABLE";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
pub const UNKNOWN_LABEL: &str = "UNKNOWN_LABEL";
pub const PROFILE_PARSE_FAILED: &str = "PROFILE_PARSE_FAILED";
pub const SUMMARY_DISABLED: &str = "SUMMARY_DISABLED";
pub const MISSING_API_KEY: &str = "MISSING_API_KEY";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const PROVIDER_REJECTED: &str = "PROVIDER_REJECTED";
pub const EMPTY_RESPONSE: &str = "EMPTY_RESPONSE";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const REPORT_WRITE_FAILED: &str = "REPORT_WRITE_FAILED";
