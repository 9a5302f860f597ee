use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use liferisk_baseline::BaselineTable;
use liferisk_core::config::CliOverrides;

use super::{load_config, GlobalArgs};

#[derive(Args, Debug)]
pub struct BaselineCommand {
    /// Life expectancy CSV (defaults to the configured dataset)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Country to look up (defaults to the configured country)
    #[arg(long)]
    pub country: Option<String>,
}

impl BaselineCommand {
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        let config = load_config(
            global,
            CliOverrides {
                dataset_path: self.dataset.map(|p| p.display().to_string()),
                ..Default::default()
            },
        )?;

        let path = Path::new(&config.baseline.dataset_path);
        let table = BaselineTable::load(path)
            .with_context(|| format!("failed to load baseline dataset {}", path.display()))?
            .with_fallback(config.baseline.fallback_life_expectancy);

        let country = self
            .country
            .unwrap_or_else(|| config.baseline.default_country.clone());

        match table.get(&country) {
            Some(record) => println!(
                "{}: {} years (reported {})",
                record.country, record.life_expectancy, record.year
            ),
            None => println!(
                "{}: not in dataset, using fallback {} years",
                country,
                table.fallback()
            ),
        }
        Ok(())
    }
}
