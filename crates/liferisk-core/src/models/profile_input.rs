use serde::{Deserialize, Serialize};

use super::profile::{
    compute_bmi, AlcoholConsumption, ExerciseFrequency, Gender, SmokingStatus, UserProfile,
};
use super::vocabulary;
use crate::config::defaults;
use crate::errors::ProfileError;

/// Numeric ranges enforced by the input form widgets.
pub const AGE_RANGE: (f64, f64) = (18.0, 100.0);
pub const HEIGHT_CM_RANGE: (f64, f64) = (120.0, 220.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 200.0);
pub const SLEEP_HOURS_RANGE: (f64, f64) = (3.0, 12.0);
pub const STRESS_LEVEL_RANGE: (f64, f64) = (1.0, 10.0);

/// Raw form state. Every field may be absent.
///
/// Fields after `city` are informational: they flow into the report but
/// never into scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub smoking_status: Option<SmokingStatus>,
    pub health_conditions: Vec<String>,
    pub family_history: Vec<String>,
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub sleep_hours: Option<u32>,
    pub stress_level: Option<u32>,
    pub alcohol_consumption: Option<AlcoholConsumption>,
    pub city: Option<String>,

    pub occupation: Option<String>,
    pub income_bracket: Option<String>,
    pub medications: Option<String>,
    pub cigarettes_per_day: Option<u32>,
    pub smoking_years: Option<u32>,
    pub years_quit: Option<u32>,
    pub exercise_intensity: Option<String>,
    pub sleep_quality: Option<String>,
    pub diet_type: Option<String>,
    pub processed_food: Option<String>,
}

impl ProfileInput {
    /// Check every numeric field against its form range.
    /// Absent fields are not checked. Returns all violations at once.
    pub fn validate(&self) -> Result<(), Vec<ProfileError>> {
        let checks = [
            ("age", self.age.map(f64::from), AGE_RANGE),
            ("height_cm", self.height_cm, HEIGHT_CM_RANGE),
            ("weight_kg", self.weight_kg, WEIGHT_KG_RANGE),
            ("sleep_hours", self.sleep_hours.map(f64::from), SLEEP_HOURS_RANGE),
            ("stress_level", self.stress_level.map(f64::from), STRESS_LEVEL_RANGE),
        ];

        let violations: Vec<ProfileError> = checks
            .into_iter()
            .filter_map(|(field, value, (min, max))| {
                let value = value?;
                // NaN fails the range check as well.
                (!(min..=max).contains(&value)).then_some(ProfileError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                })
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Condition names outside the form's option lists.
    ///
    /// Scoring accepts any name, so these are warnings rather than errors.
    pub fn unknown_labels(&self) -> Vec<ProfileError> {
        let unknown = |field: &'static str, values: &[String], known: &[&str]| {
            values
                .iter()
                .filter(|v| !v.trim().is_empty() && !known.contains(&v.as_str()))
                .map(|v| ProfileError::UnknownLabel {
                    field,
                    value: v.to_string(),
                })
                .collect::<Vec<_>>()
        };

        let mut out = unknown(
            "health_conditions",
            &self.health_conditions,
            vocabulary::HEALTH_CONDITIONS,
        );
        out.extend(unknown(
            "family_history",
            &self.family_history,
            vocabulary::FAMILY_HISTORY,
        ));
        out
    }

    /// BMI from height and weight, or the documented default when either is missing.
    pub fn bmi(&self) -> f64 {
        match (self.height_cm, self.weight_kg) {
            (Some(h), Some(w)) => compute_bmi(h, w),
            _ => defaults::DEFAULT_PROFILE_BMI,
        }
    }

    /// Build the scored profile, applying the documented defaults.
    pub fn to_profile(&self) -> UserProfile {
        let fallback = UserProfile::default();
        UserProfile {
            age: self.age.unwrap_or(fallback.age),
            gender: self.gender.unwrap_or(fallback.gender),
            bmi: self.bmi(),
            smoking_status: self.smoking_status.unwrap_or(fallback.smoking_status),
            health_conditions: distinct(&self.health_conditions),
            family_history: distinct(&self.family_history),
            exercise_frequency: self.exercise_frequency.unwrap_or(fallback.exercise_frequency),
            sleep_hours: self.sleep_hours.unwrap_or(fallback.sleep_hours),
            stress_level: self.stress_level.unwrap_or(fallback.stress_level),
            alcohol_consumption: self
                .alcohol_consumption
                .unwrap_or(fallback.alcohol_consumption),
            city: self
                .city
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(fallback.city),
        }
    }

    /// Informational answers that were given, as `(label, value)` pairs in
    /// form order. Occupation is excluded; the report shows it separately.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let text = |v: &Option<String>| v.as_ref().filter(|s| !s.trim().is_empty()).cloned();
        let number = |v: Option<u32>| v.map(|n| n.to_string());

        [
            ("Income Bracket", text(&self.income_bracket)),
            ("Medications", text(&self.medications)),
            ("Cigarettes per Day", number(self.cigarettes_per_day)),
            ("Years Smoking", number(self.smoking_years)),
            ("Years Since Quitting", number(self.years_quit)),
            ("Exercise Intensity", text(&self.exercise_intensity)),
            ("Sleep Quality", text(&self.sleep_quality)),
            ("Diet Type", text(&self.diet_type)),
            ("Processed Food", text(&self.processed_food)),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// Parse a profile from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ProfileError> {
        toml::from_str(text).map_err(|e| ProfileError::ParseFailed {
            path: "<string>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse a profile from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(text).map_err(|e| ProfileError::ParseFailed {
            path: "<string>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Read a profile file. `.json` files are parsed as JSON, everything else as TOML.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path).map_err(|e| ProfileError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json(&text)
        } else {
            Self::from_toml(&text)
        };
        parsed.map_err(|e| match e {
            ProfileError::ParseFailed { reason, .. } => ProfileError::ParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }
}

/// Drops blank entries and repeats, keeping first-seen order. Names are
/// matched exactly, so surrounding whitespace is kept.
fn distinct(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !item.trim().is_empty() && !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
