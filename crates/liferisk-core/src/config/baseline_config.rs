use serde::{Deserialize, Serialize};

use super::defaults;

/// Reference dataset and baseline lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    /// Path to the life expectancy CSV.
    pub dataset_path: String,
    /// Country every city resolves to.
    pub default_country: String,
    /// Baseline used when the country is absent from the table.
    pub fallback_life_expectancy: f64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            dataset_path: defaults::DEFAULT_DATASET_PATH.to_string(),
            default_country: defaults::DEFAULT_COUNTRY.to_string(),
            fallback_life_expectancy: defaults::DEFAULT_FALLBACK_LIFE_EXPECTANCY,
        }
    }
}
