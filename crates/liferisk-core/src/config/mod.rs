//! Configuration system for LifeRisk.
//! TOML-based, resolution: CLI > env > config file > defaults.

pub mod baseline_config;
pub mod defaults;
pub mod liferisk_config;
pub mod observability_config;
pub mod report_config;
pub mod summary_config;

pub use baseline_config::BaselineConfig;
pub use liferisk_config::{CliOverrides, LifeRiskConfig};
pub use observability_config::ObservabilityConfig;
pub use report_config::ReportConfig;
pub use summary_config::SummaryConfig;
