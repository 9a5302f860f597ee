use liferisk_core::models::{BmiCategory, ProfileInput};
use liferisk_core::models::profile_input::{
    AGE_RANGE, HEIGHT_CM_RANGE, SLEEP_HOURS_RANGE, STRESS_LEVEL_RANGE, WEIGHT_KG_RANGE,
};
use proptest::prelude::*;

fn in_range_input() -> impl Strategy<Value = ProfileInput> {
    (
        (AGE_RANGE.0 as u32)..=(AGE_RANGE.1 as u32),
        HEIGHT_CM_RANGE.0..=HEIGHT_CM_RANGE.1,
        WEIGHT_KG_RANGE.0..=WEIGHT_KG_RANGE.1,
        (SLEEP_HOURS_RANGE.0 as u32)..=(SLEEP_HOURS_RANGE.1 as u32),
        (STRESS_LEVEL_RANGE.0 as u32)..=(STRESS_LEVEL_RANGE.1 as u32),
    )
        .prop_map(|(age, height, weight, sleep, stress)| ProfileInput {
            age: Some(age),
            height_cm: Some(height),
            weight_kg: Some(weight),
            sleep_hours: Some(sleep),
            stress_level: Some(stress),
            ..Default::default()
        })
}

// ── Validation ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn form_range_values_always_validate(input in in_range_input()) {
        prop_assert!(input.validate().is_ok());
    }

    #[test]
    fn age_above_range_is_rejected(age in 101u32..200) {
        let input = ProfileInput { age: Some(age), ..Default::default() };
        let errors = input.validate().unwrap_err();
        prop_assert_eq!(errors.len(), 1);
    }
}

// ── Conversion ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn to_profile_keeps_numeric_fields(input in in_range_input()) {
        let profile = input.to_profile();
        prop_assert_eq!(Some(profile.age), input.age);
        prop_assert_eq!(Some(profile.sleep_hours), input.sleep_hours);
        prop_assert_eq!(Some(profile.stress_level), input.stress_level);
        prop_assert!(profile.bmi.is_finite() && profile.bmi > 0.0);
    }

    #[test]
    fn bmi_category_is_monotonic(a in 10.0f64..60.0, b in 10.0f64..60.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(BmiCategory::from_bmi(lo) <= BmiCategory::from_bmi(hi));
    }
}
