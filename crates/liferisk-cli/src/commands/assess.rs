use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Args;
use liferisk_baseline::{BaselineTable, CountryResolver};
use liferisk_core::config::{BaselineConfig, CliOverrides};
use liferisk_core::models::ProfileInput;
use liferisk_core::tracing::events;
use liferisk_report::{render_report, resolve_output_path, write_report, ReportContext};
use liferisk_scoring::{RiskEngine, RiskTier};
use liferisk_summary::{analysis_or_fallback, build_summarizer, UNAVAILABLE_NOTE};

use super::{load_config, GlobalArgs};

#[derive(Args, Debug)]
pub struct AssessCommand {
    /// Profile to assess (.toml or .json)
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Life expectancy CSV (defaults to the configured dataset)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Skip the AI analysis
    #[arg(long)]
    pub offline: bool,

    /// Report file, or a directory for the dated report file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the assessment as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl AssessCommand {
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        let config = load_config(
            global,
            CliOverrides {
                dataset_path: self.dataset.as_ref().map(|p| p.display().to_string()),
                offline: self.offline,
                ..Default::default()
            },
        )?;

        let input = ProfileInput::from_file(&self.profile)
            .with_context(|| format!("failed to read profile {}", self.profile.display()))?;
        if let Err(violations) = input.validate() {
            let lines: Vec<String> = violations.iter().map(|v| format!("  {v}")).collect();
            bail!("invalid profile:\n{}", lines.join("\n"));
        }
        tracing::debug!(path = %self.profile.display(), "profile loaded");
        for warning in input.unknown_labels() {
            eprintln!("warning: {warning}");
        }
        let profile = input.to_profile();

        let engine = build_engine(&config.baseline);
        let assessment = engine.assess(&profile);

        let analysis = match build_summarizer(&config.summary) {
            Ok(summarizer) => analysis_or_fallback(
                summarizer.as_ref(),
                &profile,
                &assessment.risks,
                &assessment.life_expectancy,
            ),
            Err(e) => {
                events::degradation_triggered("summary", &e.to_string(), "unavailable note");
                format!("{UNAVAILABLE_NOTE} ({e}).")
            }
        };

        let now = Local::now().naive_local();
        let details = input.details();
        let report = render_report(&ReportContext {
            profile: &profile,
            occupation: input.occupation.as_deref(),
            details: &details,
            assessment: &assessment,
            analysis: &analysis,
            generated_at: now,
        });
        let path = resolve_output_path(
            self.output.as_deref(),
            Path::new(&config.report.output_dir),
            now.date(),
        );
        write_report(&path, &report)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
            return Ok(());
        }

        println!("BMI: {:.1} ({})", profile.bmi, profile.bmi_category().label());
        for risk in assessment.risks.sorted_descending() {
            println!(
                "{:<14} {:>8.3}%  {}",
                risk.display_name(),
                risk.percent(),
                RiskTier::from_annual_risk(risk.annual_risk)
            );
        }
        println!(
            "Life expectancy: {:.0} years ({:.0} remaining)",
            assessment.life_expectancy.years, assessment.years_remaining
        );
        println!("Report written to {}", path.display());
        Ok(())
    }
}

/// Engine over the configured dataset. An unreadable dataset degrades to
/// the fallback baseline for every country.
fn build_engine(config: &BaselineConfig) -> RiskEngine {
    match RiskEngine::from_config(config) {
        Ok(engine) => engine,
        Err(e) => {
            events::degradation_triggered("baseline", &e.to_string(), "fallback life expectancy");
            let table = BaselineTable::empty().with_fallback(config.fallback_life_expectancy);
            RiskEngine::new(table).with_resolver(CountryResolver::new(&config.default_country))
        }
    }
}
