pub mod assess;
pub mod baseline;
pub mod catalog;

use std::path::PathBuf;

use anyhow::{Context, Result};
use liferisk_core::config::{CliOverrides, LifeRiskConfig};
use liferisk_core::tracing::setup;

pub use assess::AssessCommand;
pub use baseline::BaselineCommand;
pub use catalog::CatalogCommand;

/// Options shared by every subcommand.
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Resolve the layered config and install the tracing subscriber it asks for.
pub fn load_config(global: &GlobalArgs, overrides: CliOverrides) -> Result<LifeRiskConfig> {
    let overrides = CliOverrides {
        log_level: global.log_level.clone(),
        ..overrides
    };
    let config = LifeRiskConfig::load(global.config.as_deref(), Some(&overrides))
        .context("failed to load configuration")?;

    if config.observability.json_logs {
        setup::init_tracing_json(&config.observability.log_level);
    } else {
        setup::init_tracing(&config.observability.log_level);
    }
    Ok(config)
}
