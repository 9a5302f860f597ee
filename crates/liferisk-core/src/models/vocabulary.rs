//! Fixed option lists offered by the input form.

/// Conditions a user can report having.
pub const HEALTH_CONDITIONS: &[&str] = &[
    "High Blood Pressure",
    "High Cholesterol",
    "Diabetes Type 1",
    "Diabetes Type 2",
    "Heart Disease",
    "Asthma",
    "COPD",
    "Depression",
    "Anxiety",
    "Arthritis",
    "Kidney Disease",
];

/// Conditions a user can report in their family.
pub const FAMILY_HISTORY: &[&str] = &[
    "Heart Disease",
    "Cancer",
    "Diabetes",
    "Stroke",
    "High BP",
    "Mental Health Issues",
    "Alzheimer's",
    "Kidney Disease",
];

pub const HIGH_BLOOD_PRESSURE: &str = "High Blood Pressure";
pub const HIGH_CHOLESTEROL: &str = "High Cholesterol";

/// Substring matched (case-sensitively) against health conditions.
pub const DIABETES_MARKER: &str = "Diabetes";

/// Diagnoses that carry the per-condition life expectancy penalty.
pub const SERIOUS_CONDITIONS: &[&str] = &["Heart Disease", "Diabetes Type 1", "Diabetes Type 2", "COPD"];
