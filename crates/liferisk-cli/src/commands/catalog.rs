use anyhow::Result;
use clap::Args;
use liferisk_scoring::catalog::catalog;
use liferisk_scoring::factors::RiskFactor;

#[derive(Args, Debug)]
pub struct CatalogCommand {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

impl CatalogCommand {
    pub fn execute(self) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(catalog())?);
            return Ok(());
        }

        for disease in catalog() {
            println!(
                "{} ({}): {} deaths per 100k per year",
                disease.display_name(),
                disease.key,
                disease.base_annual_deaths_per_100k
            );
            for factor in &disease.risk_factors {
                let note = if RiskFactor::from_name(&factor.name).is_some() {
                    ""
                } else {
                    " (not evaluated)"
                };
                println!("  {:<22} x{}{}", factor.name, factor.multiplier, note);
            }
        }
        Ok(())
    }
}
