use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::constants;

/// Self-reported gender. Only `Female` moves the life expectancy estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
    #[serde(alias = "other")]
    Other,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[default]
    #[serde(rename = "Never", alias = "never")]
    Never,
    #[serde(rename = "Former (quit)", alias = "former_quit")]
    FormerQuit,
    #[serde(rename = "Current smoker", alias = "current_smoker")]
    CurrentSmoker,
}

impl SmokingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::FormerQuit => "Former (quit)",
            Self::CurrentSmoker => "Current smoker",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseFrequency {
    #[default]
    #[serde(rename = "Never", alias = "never")]
    Never,
    #[serde(rename = "1-2 times/week", alias = "one_to_two_per_week")]
    OneToTwoPerWeek,
    #[serde(rename = "3-4 times/week", alias = "three_to_four_per_week")]
    ThreeToFourPerWeek,
    #[serde(rename = "Daily", alias = "daily")]
    Daily,
}

impl ExerciseFrequency {
    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::OneToTwoPerWeek => "1-2 times/week",
            Self::ThreeToFourPerWeek => "3-4 times/week",
            Self::Daily => "Daily",
        }
    }

    /// Three or more sessions a week.
    pub fn is_regular(self) -> bool {
        matches!(self, Self::ThreeToFourPerWeek | Self::Daily)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlcoholConsumption {
    #[default]
    #[serde(alias = "never")]
    Never,
    #[serde(alias = "occasional")]
    Occasional,
    #[serde(alias = "moderate")]
    Moderate,
    #[serde(alias = "heavy")]
    Heavy,
}

impl AlcoholConsumption {
    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Occasional => "Occasional",
            Self::Moderate => "Moderate",
            Self::Heavy => "Heavy",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Gender, SmokingStatus, ExerciseFrequency, AlcoholConsumption);

/// WHO-style BMI band, used for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < constants::UNDERWEIGHT_BMI {
            Self::Underweight
        } else if bmi < constants::OVERWEIGHT_BMI {
            Self::Normal
        } else if bmi < constants::OBESITY_BMI {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// `weight_kg / height_m²`.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// The scored subject. Built once per assessment and read-only afterwards.
///
/// `Default` yields the documented fallbacks for absent form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub bmi: f64,
    pub smoking_status: SmokingStatus,
    /// Distinct names, in the order they were given.
    pub health_conditions: Vec<String>,
    pub family_history: Vec<String>,
    pub exercise_frequency: ExerciseFrequency,
    pub sleep_hours: u32,
    pub stress_level: u32,
    pub alcohol_consumption: AlcoholConsumption,
    pub city: String,
}

impl UserProfile {
    pub fn has_condition(&self, condition: &str) -> bool {
        self.health_conditions.iter().any(|c| c == condition)
    }

    pub fn has_family_history(&self, condition: &str) -> bool {
        self.family_history.iter().any(|c| c == condition)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: defaults::DEFAULT_PROFILE_AGE,
            gender: Gender::default(),
            bmi: defaults::DEFAULT_PROFILE_BMI,
            smoking_status: SmokingStatus::default(),
            health_conditions: Vec::new(),
            family_history: Vec::new(),
            exercise_frequency: ExerciseFrequency::default(),
            sleep_hours: defaults::DEFAULT_PROFILE_SLEEP_HOURS,
            stress_level: defaults::DEFAULT_PROFILE_STRESS_LEVEL,
            alcohol_consumption: AlcoholConsumption::default(),
            city: defaults::DEFAULT_PROFILE_CITY.to_string(),
        }
    }
}
