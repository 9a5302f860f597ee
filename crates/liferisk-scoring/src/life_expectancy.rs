use liferisk_baseline::{lookup_baseline, BaselineTable};
use liferisk_core::constants::{OBESITY_BMI, OVERWEIGHT_BMI, SERIOUS_CONDITION_PENALTY};
use liferisk_core::models::vocabulary::SERIOUS_CONDITIONS;
use liferisk_core::models::{AlcoholConsumption, ExerciseFrequency, Gender, SmokingStatus, UserProfile};
use serde::Serialize;

/// One additive life expectancy adjustment, in years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub label: String,
    pub years: f64,
}

impl Adjustment {
    fn new(label: impl Into<String>, years: f64) -> Self {
        Self {
            label: label.into(),
            years,
        }
    }
}

/// Every adjustment that applies to `profile`, in evaluation order.
///
/// All conditions read the original profile; none depends on another.
pub fn adjustments(profile: &UserProfile) -> Vec<Adjustment> {
    let mut out = Vec::new();

    if profile.gender == Gender::Female {
        out.push(Adjustment::new("female", 3.0));
    }

    match profile.smoking_status {
        SmokingStatus::CurrentSmoker => out.push(Adjustment::new("current smoker", -10.0)),
        SmokingStatus::FormerQuit => out.push(Adjustment::new("former smoker", -3.0)),
        SmokingStatus::Never => {}
    }

    match profile.alcohol_consumption {
        AlcoholConsumption::Heavy => out.push(Adjustment::new("heavy drinking", -5.0)),
        AlcoholConsumption::Moderate => out.push(Adjustment::new("moderate drinking", -1.0)),
        AlcoholConsumption::Never | AlcoholConsumption::Occasional => {}
    }

    if profile.exercise_frequency.is_regular() {
        out.push(Adjustment::new("regular exercise", 3.0));
    } else if profile.exercise_frequency == ExerciseFrequency::Never {
        out.push(Adjustment::new("no exercise", -4.0));
    }

    if profile.bmi >= OBESITY_BMI {
        out.push(Adjustment::new("obese (BMI >= 30)", -3.0));
    } else if profile.bmi >= OVERWEIGHT_BMI {
        out.push(Adjustment::new("overweight (BMI 25-30)", -1.0));
    }

    if profile.sleep_hours < 6 {
        out.push(Adjustment::new("short sleep", -2.0));
    } else if profile.sleep_hours > 9 {
        out.push(Adjustment::new("long sleep", -1.0));
    }

    if profile.stress_level >= 8 {
        out.push(Adjustment::new("high stress", -2.0));
    }

    // Cumulative: each serious diagnosis costs the full penalty.
    let serious = profile
        .health_conditions
        .iter()
        .filter(|c| SERIOUS_CONDITIONS.contains(&c.as_str()))
        .count();
    if serious > 0 {
        out.push(Adjustment::new(
            format!("serious conditions ({serious})"),
            -(SERIOUS_CONDITION_PENALTY * serious as f64),
        ));
    }

    out
}

/// Predicted life expectancy for `profile`.
///
/// Starts from the country baseline, adds every adjustment, then floors
/// the result at `age + 1`.
pub fn compute_life_expectancy(country: &str, profile: &UserProfile, table: &BaselineTable) -> f64 {
    let baseline = lookup_baseline(country, table);
    let raw = adjustments(profile)
        .iter()
        .fold(baseline, |acc, adj| acc + adj.years);
    raw.max(age_floor(profile))
}

fn age_floor(profile: &UserProfile) -> f64 {
    f64::from(profile.age) + 1.0
}

#[derive(Debug, Clone, Serialize)]
pub struct LifeExpectancyBreakdown {
    pub country: String,
    pub baseline: f64,
    pub adjustments: Vec<Adjustment>,
    /// Baseline plus adjustments, before the age floor.
    pub raw: f64,
    pub floor: f64,
    pub clamped: bool,
    pub life_expectancy: f64,
}

/// Compute life expectancy with every applied adjustment listed.
pub fn compute_breakdown(
    country: &str,
    profile: &UserProfile,
    table: &BaselineTable,
) -> LifeExpectancyBreakdown {
    let baseline = lookup_baseline(country, table);
    let adjustments = adjustments(profile);
    let raw = adjustments
        .iter()
        .fold(baseline, |acc, adj| acc + adj.years);
    let floor = age_floor(profile);

    LifeExpectancyBreakdown {
        country: country.to_string(),
        baseline,
        adjustments,
        raw,
        floor,
        clamped: raw < floor,
        life_expectancy: raw.max(floor),
    }
}
