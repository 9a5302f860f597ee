use serde::{Deserialize, Serialize};

use super::defaults;

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory the dated report file is written to.
    pub output_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::DEFAULT_REPORT_OUTPUT_DIR.to_string(),
        }
    }
}
