use liferisk_core::models::vocabulary::{DIABETES_MARKER, HIGH_BLOOD_PRESSURE, HIGH_CHOLESTEROL};
use liferisk_core::models::UserProfile;

pub fn has_high_blood_pressure(profile: &UserProfile) -> bool {
    profile.has_condition(HIGH_BLOOD_PRESSURE)
}

pub fn has_high_cholesterol(profile: &UserProfile) -> bool {
    profile.has_condition(HIGH_CHOLESTEROL)
}

/// Any condition containing "Diabetes", case-sensitive.
pub fn has_diabetes(profile: &UserProfile) -> bool {
    profile
        .health_conditions
        .iter()
        .any(|c| c.contains(DIABETES_MARKER))
}
