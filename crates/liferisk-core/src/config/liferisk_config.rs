//! Top-level LifeRisk configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, BaselineConfig, ObservabilityConfig, ReportConfig, SummaryConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LIFERISK_*`)
/// 3. Config file (`--config` path, or `liferisk.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LifeRiskConfig {
    pub baseline: BaselineConfig,
    pub summary: SummaryConfig,
    pub report: ReportConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dataset_path: Option<String>,
    pub offline: bool,
    pub output_dir: Option<String>,
    pub log_level: Option<String>,
}

impl LifeRiskConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `liferisk.toml`
    /// in the working directory is used when present.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if implicit.exists() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fallback = self.baseline.fallback_life_expectancy;
        if !(fallback > 0.0 && fallback < 150.0) {
            return Err(ConfigError::ValidationFailed {
                field: "baseline.fallback_life_expectancy".to_string(),
                message: "must be between 0 and 150 years".to_string(),
            });
        }
        if self.baseline.default_country.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "baseline.default_country".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.summary.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "summary.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `LIFERISK_BASELINE_DATASET_PATH`, `LIFERISK_SUMMARY_MODEL`, etc.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LIFERISK_BASELINE_DATASET_PATH") {
            self.baseline.dataset_path = val;
        }
        if let Ok(val) = std::env::var("LIFERISK_BASELINE_DEFAULT_COUNTRY") {
            self.baseline.default_country = val;
        }
        if let Ok(val) = std::env::var("LIFERISK_BASELINE_FALLBACK_LIFE_EXPECTANCY") {
            if let Ok(v) = val.parse::<f64>() {
                self.baseline.fallback_life_expectancy = v;
            }
        }
        if let Ok(val) = std::env::var("LIFERISK_SUMMARY_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                self.summary.enabled = v;
            }
        }
        if let Ok(val) = std::env::var("LIFERISK_SUMMARY_ENDPOINT") {
            self.summary.endpoint = val;
        }
        if let Ok(val) = std::env::var("LIFERISK_SUMMARY_MODEL") {
            self.summary.model = val;
        }
        if let Ok(val) = std::env::var("LIFERISK_SUMMARY_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.summary.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("LIFERISK_SUMMARY_MAX_RETRIES") {
            if let Ok(v) = val.parse::<u32>() {
                self.summary.max_retries = v;
            }
        }
        if let Ok(val) = std::env::var("LIFERISK_SUMMARY_INITIAL_BACKOFF_MS") {
            if let Ok(v) = val.parse::<u64>() {
                self.summary.initial_backoff_ms = v;
            }
        }
        if let Ok(val) = std::env::var("LIFERISK_REPORT_OUTPUT_DIR") {
            self.report.output_dir = val;
        }
        if let Ok(val) = std::env::var("LIFERISK_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("LIFERISK_OBSERVABILITY_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json_logs = v;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.dataset_path {
            self.baseline.dataset_path = v.clone();
        }
        if cli.offline {
            self.summary.enabled = false;
        }
        if let Some(ref v) = cli.output_dir {
            self.report.output_dir = v.clone();
        }
        if let Some(ref v) = cli.log_level {
            self.observability.log_level = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
