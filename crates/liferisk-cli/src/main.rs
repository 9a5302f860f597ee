mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{AssessCommand, BaselineCommand, CatalogCommand};

#[derive(Parser)]
#[command(name = "liferisk")]
#[command(about = "Estimate disease mortality risk and life expectancy", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a liferisk.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level for liferisk crates (overridden by LIFERISK_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a profile and write the report
    Assess(AssessCommand),
    /// Print the disease catalog
    Catalog(CatalogCommand),
    /// Print the baseline life expectancy for a country
    Baseline(BaselineCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let global = commands::GlobalArgs {
        config: cli.config,
        log_level: cli.log_level,
    };

    match cli.command {
        Commands::Assess(cmd) => cmd.execute(&global),
        Commands::Catalog(cmd) => cmd.execute(),
        Commands::Baseline(cmd) => cmd.execute(&global),
    }
}
