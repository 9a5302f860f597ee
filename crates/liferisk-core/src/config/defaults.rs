// Single source of truth for all default values.

use crate::constants;

// --- Config file ---
pub const DEFAULT_CONFIG_FILENAME: &str = "liferisk.toml";

// --- Baseline ---
pub const DEFAULT_DATASET_PATH: &str = "life_expectancy.csv";
pub const DEFAULT_COUNTRY: &str = constants::DEFAULT_COUNTRY;
pub const DEFAULT_FALLBACK_LIFE_EXPECTANCY: f64 = constants::FALLBACK_LIFE_EXPECTANCY;

// --- Summary ---
pub const DEFAULT_SUMMARY_ENABLED: bool = true;
pub const DEFAULT_SUMMARY_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SUMMARY_MODEL: &str = "models/gemini-1.5-flash";
pub const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SUMMARY_MAX_RETRIES: u32 = 2;
pub const DEFAULT_SUMMARY_INITIAL_BACKOFF_MS: u64 = 500;
pub const API_KEY_ENV_VAR: &str = "LIFERISK_GEMINI_API_KEY";

// --- Report ---
pub const DEFAULT_REPORT_OUTPUT_DIR: &str = ".";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Profile input (applied when a form field is absent) ---
pub const DEFAULT_PROFILE_AGE: u32 = 0;
pub const DEFAULT_PROFILE_BMI: f64 = 25.0;
pub const DEFAULT_PROFILE_SLEEP_HOURS: u32 = 7;
pub const DEFAULT_PROFILE_STRESS_LEVEL: u32 = 5;
pub const DEFAULT_PROFILE_CITY: &str = constants::DEFAULT_COUNTRY;
