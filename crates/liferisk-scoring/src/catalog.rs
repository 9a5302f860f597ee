//! The fixed disease catalog.
//!
//! Built once on first access and never mutated. Factor names without a
//! predicate (`alcohol_heavy`, `atrial_fib`, `age_over_45`,
//! `secondhand_smoke`, `air_pollution`, `occupational_exposure`) are kept
//! as declared but never applied.

use std::sync::LazyLock;

use liferisk_core::models::DiseaseProfile;

pub const HEART_DISEASE: &str = "heart_disease";
pub const CANCER: &str = "cancer";
pub const STROKE: &str = "stroke";
pub const DIABETES: &str = "diabetes";
pub const COPD: &str = "copd";

/// Diseases whose elevated risk warrants critical illness cover.
pub const CRITICAL_ILLNESSES: &[&str] = &[HEART_DISEASE, CANCER, STROKE];

static CATALOG: LazyLock<Vec<DiseaseProfile>> = LazyLock::new(|| {
    vec![
        DiseaseProfile::new(
            HEART_DISEASE,
            162.1,
            &[
                ("smoking", 2.5),
                ("high_bp", 2.2),
                ("high_cholesterol", 1.8),
                ("diabetes", 2.0),
                ("obesity", 1.6),
                ("sedentary", 1.4),
            ],
        ),
        DiseaseProfile::new(
            CANCER,
            146.6,
            &[
                ("smoking", 3.0),
                ("alcohol_heavy", 1.5),
                ("family_history", 2.0),
                ("obesity", 1.3),
                ("age_over_50", 5.0),
            ],
        ),
        DiseaseProfile::new(
            STROKE,
            39.0,
            &[
                ("smoking", 2.0),
                ("high_bp", 3.0),
                ("diabetes", 1.8),
                ("atrial_fib", 2.5),
                ("age_over_65", 3.0),
            ],
        ),
        DiseaseProfile::new(
            DIABETES,
            22.4,
            &[
                ("obesity", 3.0),
                ("sedentary", 2.0),
                ("family_history", 2.5),
                ("age_over_45", 2.0),
                ("high_bp", 1.5),
            ],
        ),
        DiseaseProfile::new(
            COPD,
            33.4,
            &[
                ("smoking", 15.0),
                ("secondhand_smoke", 2.0),
                ("air_pollution", 1.5),
                ("occupational_exposure", 1.8),
            ],
        ),
    ]
});

/// All catalog entries, in display order.
pub fn catalog() -> &'static [DiseaseProfile] {
    &CATALOG
}

/// Catalog entry for `key`.
pub fn find(key: &str) -> Option<&'static DiseaseProfile> {
    CATALOG.iter().find(|d| d.key == key)
}
