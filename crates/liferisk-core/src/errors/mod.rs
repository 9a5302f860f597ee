//! Error handling for LifeRisk.
//! One error enum per subsystem, `thiserror` only, aggregated by `LifeRiskError`.

pub mod baseline_error;
pub mod config_error;
pub mod error_code;
pub mod liferisk_error;
pub mod profile_error;
pub mod report_error;
pub mod scoring_error;
pub mod summary_error;

pub use baseline_error::BaselineError;
pub use config_error::ConfigError;
pub use error_code::LifeRiskErrorCode;
pub use liferisk_error::{LifeRiskError, LifeRiskResult};
pub use profile_error::ProfileError;
pub use report_error::ReportError;
pub use scoring_error::ScoringError;
pub use summary_error::SummaryError;
