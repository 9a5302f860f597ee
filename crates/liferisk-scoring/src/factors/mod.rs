//! Risk-factor predicates.
//!
//! Each catalog factor name maps to at most one predicate over the profile.
//! A triggered factor contributes its multiplier; an untriggered one
//! contributes nothing. Names with no predicate are never evaluated.

pub mod age;
pub mod conditions;
pub mod family;
pub mod lifestyle;
pub mod smoking;

use liferisk_core::models::UserProfile;

/// Factor names that have a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskFactor {
    Smoking,
    HighBp,
    HighCholesterol,
    Diabetes,
    Obesity,
    Sedentary,
    FamilyHistory,
    AgeOver50,
    AgeOver65,
}

impl RiskFactor {
    /// Predicate for a catalog factor name, if one exists.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "smoking" => Some(Self::Smoking),
            "high_bp" => Some(Self::HighBp),
            "high_cholesterol" => Some(Self::HighCholesterol),
            "diabetes" => Some(Self::Diabetes),
            "obesity" => Some(Self::Obesity),
            "sedentary" => Some(Self::Sedentary),
            "family_history" => Some(Self::FamilyHistory),
            "age_over_50" => Some(Self::AgeOver50),
            "age_over_65" => Some(Self::AgeOver65),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Smoking => "smoking",
            Self::HighBp => "high_bp",
            Self::HighCholesterol => "high_cholesterol",
            Self::Diabetes => "diabetes",
            Self::Obesity => "obesity",
            Self::Sedentary => "sedentary",
            Self::FamilyHistory => "family_history",
            Self::AgeOver50 => "age_over_50",
            Self::AgeOver65 => "age_over_65",
        }
    }

    /// Multiplier this factor contributes for `disease_key`, or `None` when
    /// the predicate does not hold.
    pub fn evaluate(self, weight: f64, disease_key: &str, profile: &UserProfile) -> Option<f64> {
        let triggered = match self {
            Self::Smoking => return smoking::calculate(profile.smoking_status, weight),
            Self::HighBp => conditions::has_high_blood_pressure(profile),
            Self::HighCholesterol => conditions::has_high_cholesterol(profile),
            Self::Diabetes => conditions::has_diabetes(profile),
            Self::Obesity => lifestyle::is_obese(profile),
            Self::Sedentary => lifestyle::is_sedentary(profile),
            Self::FamilyHistory => family::has_family_history(disease_key, profile),
            Self::AgeOver50 => age::is_over(profile, age::OVER_50),
            Self::AgeOver65 => age::is_over(profile, age::OVER_65),
        };
        triggered.then_some(weight)
    }
}
