use liferisk_baseline::BaselineTable;
use liferisk_core::models::{
    AlcoholConsumption, ExerciseFrequency, Gender, SmokingStatus, UserProfile,
};
use liferisk_scoring::catalog::catalog;
use liferisk_scoring::{compute_disease_risk, compute_life_expectancy, RiskEngine};
use proptest::prelude::*;

const CONDITIONS: [&str; 6] = [
    "High Blood Pressure",
    "High Cholesterol",
    "Diabetes Type 2",
    "Heart Disease",
    "COPD",
    "Asthma",
];
const FAMILY: [&str; 4] = ["Heart Disease", "Cancer", "Stroke", "Diabetes"];

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (
        (
            0u32..110,
            prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)],
            10.0f64..50.0,
            prop_oneof![
                Just(SmokingStatus::Never),
                Just(SmokingStatus::FormerQuit),
                Just(SmokingStatus::CurrentSmoker)
            ],
            prop::sample::subsequence(CONDITIONS.to_vec(), 0..=CONDITIONS.len()),
            prop::sample::subsequence(FAMILY.to_vec(), 0..=FAMILY.len()),
        ),
        (
            prop_oneof![
                Just(ExerciseFrequency::Never),
                Just(ExerciseFrequency::OneToTwoPerWeek),
                Just(ExerciseFrequency::ThreeToFourPerWeek),
                Just(ExerciseFrequency::Daily)
            ],
            3u32..13,
            1u32..11,
            prop_oneof![
                Just(AlcoholConsumption::Never),
                Just(AlcoholConsumption::Occasional),
                Just(AlcoholConsumption::Moderate),
                Just(AlcoholConsumption::Heavy)
            ],
        ),
    )
        .prop_map(
            |((age, gender, bmi, smoking, conditions, family), (exercise, sleep, stress, alcohol))| {
                UserProfile {
                    age,
                    gender,
                    bmi,
                    smoking_status: smoking,
                    health_conditions: to_set(&conditions),
                    family_history: to_set(&family),
                    exercise_frequency: exercise,
                    sleep_hours: sleep,
                    stress_level: stress,
                    alcohol_consumption: alcohol,
                    ..Default::default()
                }
            },
        )
}

fn to_set(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Disease risk ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn risk_is_never_below_base_rate(profile in arb_profile()) {
        for disease in catalog() {
            prop_assert!(compute_disease_risk(disease, &profile) >= disease.base_risk());
        }
    }

    #[test]
    fn smoking_never_lowers_risk(profile in arb_profile()) {
        let never = UserProfile { smoking_status: SmokingStatus::Never, ..profile.clone() };
        let former = UserProfile { smoking_status: SmokingStatus::FormerQuit, ..profile.clone() };
        let current = UserProfile { smoking_status: SmokingStatus::CurrentSmoker, ..profile };
        for disease in catalog() {
            let n = compute_disease_risk(disease, &never);
            let f = compute_disease_risk(disease, &former);
            let c = compute_disease_risk(disease, &current);
            prop_assert!(n <= f && f <= c, "{}: {} {} {}", disease.key, n, f, c);
        }
    }

    #[test]
    fn scoring_is_deterministic(profile in arb_profile()) {
        let engine = RiskEngine::default();
        prop_assert_eq!(engine.score_all(&profile), engine.score_all(&profile));
        prop_assert_eq!(engine.life_expectancy(&profile), engine.life_expectancy(&profile));
    }
}

// ── Life expectancy ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn life_expectancy_exceeds_age(profile in arb_profile(), baseline in 40.0f64..90.0) {
        let table = BaselineTable::from_pairs([("India", baseline)]);
        let years = compute_life_expectancy("India", &profile, &table);
        prop_assert!(years >= f64::from(profile.age) + 1.0);
    }

    #[test]
    fn years_remaining_is_never_negative(profile in arb_profile()) {
        let assessment = RiskEngine::default().assess(&profile);
        prop_assert!(assessment.years_remaining >= 0.0);
    }

    #[test]
    fn breakdown_agrees_with_scalar(profile in arb_profile()) {
        let engine = RiskEngine::default();
        let breakdown = engine.life_expectancy_breakdown(&profile);
        prop_assert_eq!(breakdown.life_expectancy, engine.life_expectancy(&profile).years);
        for disease in catalog() {
            let bd = engine.risk_breakdown(&disease.key, &profile).unwrap();
            prop_assert_eq!(bd.annual_risk, compute_disease_risk(disease, &profile));
        }
    }
}
