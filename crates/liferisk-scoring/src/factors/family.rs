use liferisk_core::models::UserProfile;

use crate::catalog;

/// Family-history label that counts for a disease.
///
/// Diseases without a label (COPD) never trigger the family history factor.
pub fn family_label(disease_key: &str) -> Option<&'static str> {
    match disease_key {
        catalog::HEART_DISEASE => Some("Heart Disease"),
        catalog::CANCER => Some("Cancer"),
        catalog::STROKE => Some("Stroke"),
        catalog::DIABETES => Some("Diabetes"),
        _ => None,
    }
}

pub fn has_family_history(disease_key: &str, profile: &UserProfile) -> bool {
    family_label(disease_key).is_some_and(|label| profile.has_family_history(label))
}
