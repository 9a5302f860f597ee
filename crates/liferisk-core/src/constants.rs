/// LifeRisk version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Divisor turning a per-100k death rate into an annual probability.
pub const DEATHS_PER_100K_DIVISOR: f64 = 100_000.0;

/// Baseline life expectancy used when the resolved country is not in the table.
pub const FALLBACK_LIFE_EXPECTANCY: f64 = 72.0;

/// Country every city input currently resolves to.
pub const DEFAULT_COUNTRY: &str = "India";

/// Former smokers get half of the disease's smoking multiplier.
pub const FORMER_SMOKER_SCALE: f64 = 0.5;

/// BMI at or above which a profile counts as obese.
pub const OBESITY_BMI: f64 = 30.0;

/// BMI at or above which a profile counts as overweight.
pub const OVERWEIGHT_BMI: f64 = 25.0;

/// BMI below which a profile counts as underweight.
pub const UNDERWEIGHT_BMI: f64 = 18.5;

/// Annual risk above which a disease is "high risk" for insurance purposes.
pub const HIGH_RISK_THRESHOLD: f64 = 0.001;

/// Years deducted per serious condition.
pub const SERIOUS_CONDITION_PENALTY: f64 = 3.0;

/// Minimum recommended term life cover (rupees).
pub const MIN_TERM_COVERAGE: u64 = 500_000;

/// Term life cover per year of age (rupees).
pub const TERM_COVERAGE_PER_YEAR_OF_AGE: u64 = 10_000;
