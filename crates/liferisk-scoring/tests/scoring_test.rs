use liferisk_baseline::{BaselineTable, CountryResolver};
use liferisk_core::errors::ScoringError;
use liferisk_core::models::{
    AlcoholConsumption, DiseaseProfile, ExerciseFrequency, Gender, SmokingStatus, UserProfile,
};
use liferisk_core::traits::IRiskEngine;
use liferisk_core::LifeRiskError;
use liferisk_scoring::catalog::{CANCER, COPD, DIABETES, HEART_DISEASE, STROKE};
use liferisk_scoring::{compute_life_expectancy, FactorStatus, RiskEngine, RiskTier};

fn healthy_35() -> UserProfile {
    UserProfile {
        age: 35,
        gender: Gender::Male,
        bmi: 22.0,
        smoking_status: SmokingStatus::Never,
        exercise_frequency: ExerciseFrequency::Daily,
        sleep_hours: 7,
        stress_level: 5,
        alcohol_consumption: AlcoholConsumption::Never,
        ..Default::default()
    }
}

fn set(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Reference scenarios ─────────────────────────────────────────────────

#[test]
fn healthy_profile_scores_base_rates() {
    let engine = RiskEngine::default();
    let profile = healthy_35();

    assert_eq!(engine.life_expectancy(&profile).years, 75.0);
    let heart = engine.compute_disease_risk_by_key(HEART_DISEASE, &profile).unwrap();
    assert_eq!(heart, 162.1 / 100_000.0);
    assert!((heart - 0.001621).abs() < 1e-15);
}

#[test]
fn current_smoker_multiplies_heart_risk_and_loses_ten_years() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        smoking_status: SmokingStatus::CurrentSmoker,
        ..healthy_35()
    };

    let heart = engine.compute_disease_risk_by_key(HEART_DISEASE, &profile).unwrap();
    assert!((heart - 0.0040525).abs() < 1e-12);
    assert_eq!(engine.life_expectancy(&profile).years, 65.0);
}

#[test]
fn life_expectancy_is_floored_at_age_plus_one() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        age: 70,
        smoking_status: SmokingStatus::CurrentSmoker,
        bmi: 31.0,
        exercise_frequency: ExerciseFrequency::Never,
        ..healthy_35()
    };

    let breakdown = engine.life_expectancy_breakdown(&profile);
    assert_eq!(breakdown.raw, 55.0);
    assert!(breakdown.clamped);
    assert_eq!(engine.life_expectancy(&profile).years, 71.0);
    assert_eq!(engine.assess(&profile).years_remaining, 1.0);
}

#[test]
fn each_serious_condition_costs_three_years() {
    let table = BaselineTable::empty();
    let base = healthy_35();
    let sick = UserProfile {
        health_conditions: set(&["Heart Disease", "COPD"]),
        ..healthy_35()
    };

    let delta = compute_life_expectancy("India", &base, &table)
        - compute_life_expectancy("India", &sick, &table);
    assert_eq!(delta, 6.0);
}

#[test]
fn non_serious_conditions_do_not_shorten_life_expectancy() {
    let table = BaselineTable::empty();
    let profile = UserProfile {
        health_conditions: set(&["High Blood Pressure", "Asthma"]),
        ..healthy_35()
    };
    assert_eq!(compute_life_expectancy("India", &profile, &table), 75.0);
}

// ── Risk factors ────────────────────────────────────────────────────────

#[test]
fn conditions_trigger_catalog_multipliers() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        health_conditions: set(&["High Blood Pressure", "Diabetes Type 2"]),
        ..healthy_35()
    };

    let stroke = engine.compute_disease_risk_by_key(STROKE, &profile).unwrap();
    let expected = 39.0 / 100_000.0 * 3.0 * 1.8;
    assert!((stroke - expected).abs() < 1e-15);

    let diabetes = engine.compute_disease_risk_by_key(DIABETES, &profile).unwrap();
    assert!((diabetes - 22.4 / 100_000.0 * 1.5).abs() < 1e-15);
}

#[test]
fn diabetes_match_is_case_sensitive() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        health_conditions: set(&["diabetes type 2"]),
        ..healthy_35()
    };

    let heart = engine.compute_disease_risk_by_key(HEART_DISEASE, &profile).unwrap();
    assert_eq!(heart, 162.1 / 100_000.0);
    let stroke = engine.compute_disease_risk_by_key(STROKE, &profile).unwrap();
    assert_eq!(stroke, 39.0 / 100_000.0);
}

#[test]
fn any_name_containing_diabetes_triggers_the_factor() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        health_conditions: set(&["Pre-Diabetes"]),
        ..healthy_35()
    };

    let heart = engine.compute_disease_risk_by_key(HEART_DISEASE, &profile).unwrap();
    assert!((heart - 162.1 / 100_000.0 * 2.0).abs() < 1e-15);
}

#[test]
fn condition_names_are_matched_exactly() {
    let table = BaselineTable::empty();
    let profile = UserProfile {
        health_conditions: set(&[" Heart Disease "]),
        ..healthy_35()
    };
    assert_eq!(compute_life_expectancy("India", &profile, &table), 75.0);
}

#[test]
fn family_history_is_disease_specific() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        family_history: set(&["Cancer"]),
        ..healthy_35()
    };
    let risks = engine.score_all(&profile);

    assert!((risks.get(CANCER).unwrap() - 146.6 / 100_000.0 * 2.0).abs() < 1e-15);
    assert_eq!(risks.get(DIABETES), Some(22.4 / 100_000.0));
}

#[test]
fn copd_ignores_family_history() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        family_history: set(&["Heart Disease", "Cancer", "Stroke", "Diabetes"]),
        ..healthy_35()
    };
    assert_eq!(
        engine.compute_disease_risk_by_key(COPD, &profile).unwrap(),
        33.4 / 100_000.0
    );
}

#[test]
fn age_thresholds_are_strict() {
    let engine = RiskEngine::default();
    let at = |age| UserProfile { age, ..healthy_35() };

    let cancer_50 = engine.compute_disease_risk_by_key(CANCER, &at(50)).unwrap();
    let cancer_51 = engine.compute_disease_risk_by_key(CANCER, &at(51)).unwrap();
    assert_eq!(cancer_50, 146.6 / 100_000.0);
    assert!((cancer_51 - cancer_50 * 5.0).abs() < 1e-15);

    let stroke_65 = engine.compute_disease_risk_by_key(STROKE, &at(65)).unwrap();
    let stroke_66 = engine.compute_disease_risk_by_key(STROKE, &at(66)).unwrap();
    assert_eq!(stroke_65, 39.0 / 100_000.0);
    assert!((stroke_66 - stroke_65 * 3.0).abs() < 1e-15);
}

#[test]
fn declared_factors_without_predicates_are_not_evaluated() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        alcohol_consumption: AlcoholConsumption::Heavy,
        ..healthy_35()
    };
    let breakdown = engine.risk_breakdown(CANCER, &profile).unwrap();
    let alcohol = breakdown
        .factors
        .iter()
        .find(|f| f.name == "alcohol_heavy")
        .unwrap();
    assert_eq!(alcohol.status, FactorStatus::NotEvaluated);
    assert_eq!(breakdown.annual_risk, 146.6 / 100_000.0);
}

#[test]
fn extreme_profiles_are_not_clamped() {
    let engine = RiskEngine::default();
    let profile = UserProfile {
        age: 90,
        bmi: 40.0,
        smoking_status: SmokingStatus::CurrentSmoker,
        exercise_frequency: ExerciseFrequency::Never,
        health_conditions: set(&["High Blood Pressure", "High Cholesterol", "Diabetes Type 1"]),
        family_history: set(&["Heart Disease", "Cancer", "Stroke", "Diabetes"]),
        ..Default::default()
    };
    let heart = engine.compute_disease_risk_by_key(HEART_DISEASE, &profile).unwrap();
    // 0.001621 * 2.5 * 2.2 * 1.8 * 2.0 * 1.6 * 1.4
    assert!((heart - 0.001621 * 44.352).abs() < 1e-12);
    let risks = engine.score_all(&profile);
    assert!(risks.iter().all(|r| r.annual_risk > 0.0));
}

// ── Engine surface ──────────────────────────────────────────────────────

#[test]
fn unknown_disease_is_an_error() {
    let engine = RiskEngine::default();
    let err = engine
        .compute_disease_risk_by_key("gout", &healthy_35())
        .unwrap_err();
    assert!(matches!(err, ScoringError::DiseaseNotFound { ref key } if key == "gout"));

    let via_trait: &dyn IRiskEngine = &engine;
    assert!(matches!(
        via_trait.disease_risk("gout", &healthy_35()),
        Err(LifeRiskError::Scoring(_))
    ));
}

#[test]
fn score_all_keeps_catalog_order() {
    let engine = RiskEngine::default();
    let keys: Vec<String> = engine
        .score_all(&healthy_35())
        .iter()
        .map(|r| r.key.clone())
        .collect();
    assert_eq!(keys, [HEART_DISEASE, CANCER, STROKE, DIABETES, COPD]);
}

#[test]
fn every_city_uses_the_default_country_baseline() {
    let table = BaselineTable::from_pairs([("India", 68.3), ("Japan", 83.7)]);
    let engine = RiskEngine::new(table);
    let mumbai = UserProfile {
        city: "Mumbai".to_string(),
        ..healthy_35()
    };
    let tokyo = UserProfile {
        city: "Tokyo".to_string(),
        ..healthy_35()
    };
    assert!((engine.life_expectancy(&mumbai).years - 71.3).abs() < 1e-9);
    assert_eq!(
        engine.life_expectancy(&mumbai),
        engine.life_expectancy(&tokyo)
    );

    let japan = RiskEngine::new(BaselineTable::from_pairs([("Japan", 83.7)]))
        .with_resolver(CountryResolver::new("Japan"));
    assert!((japan.life_expectancy(&mumbai).years - 86.7).abs() < 1e-9);
}

#[test]
fn custom_catalog_replaces_builtin() {
    let engine = RiskEngine::default().with_catalog(vec![DiseaseProfile::new(
        "gout",
        10.0,
        &[("obesity", 2.0)],
    )]);
    let profile = UserProfile {
        bmi: 32.0,
        ..healthy_35()
    };
    assert_eq!(engine.score_all(&profile).len(), 1);
    assert!((engine.compute_disease_risk_by_key("gout", &profile).unwrap() - 0.0002).abs() < 1e-15);
    assert!(engine.compute_disease_risk_by_key(HEART_DISEASE, &profile).is_err());
}

#[test]
fn assessment_carries_recommendations() {
    let engine = RiskEngine::default();
    let smoker = UserProfile {
        age: 60,
        smoking_status: SmokingStatus::CurrentSmoker,
        ..healthy_35()
    };
    let assessment = engine.assess(&smoker);

    assert_eq!(assessment.recommendations.term_life_cover, 600_000);
    assert!(assessment
        .recommendations
        .high_risk_diseases
        .iter()
        .any(|k| k == HEART_DISEASE));
    assert_eq!(assessment.recommendations.critical_illness.lakhs, "25-50");
    assert_eq!(
        assessment.years_remaining,
        assessment.life_expectancy.years - 60.0
    );
}

#[test]
fn batch_assessment_matches_individual_calls() {
    let engine = RiskEngine::default();
    let profiles = vec![
        healthy_35(),
        UserProfile {
            smoking_status: SmokingStatus::FormerQuit,
            ..healthy_35()
        },
    ];
    let batch = engine.assess_batch(&profiles);
    assert_eq!(batch.len(), 2);
    for (assessment, profile) in batch.iter().zip(&profiles) {
        assert_eq!(assessment.risks, engine.score_all(profile));
        assert_eq!(assessment.life_expectancy, engine.life_expectancy(profile));
    }
}

#[test]
fn tiers_classify_percentages() {
    let engine = RiskEngine::default();
    let risks = engine.score_all(&healthy_35());
    let tiers: Vec<RiskTier> = risks
        .iter()
        .map(|r| RiskTier::from_annual_risk(r.annual_risk))
        .collect();
    // heart 0.1621 %, cancer 0.1466 %, stroke 0.039 %, diabetes 0.0224 %, copd 0.0334 %
    assert_eq!(
        tiers,
        [
            RiskTier::Elevated,
            RiskTier::Elevated,
            RiskTier::Low,
            RiskTier::Low,
            RiskTier::Low
        ]
    );
}

#[test]
fn assessment_serializes_to_json() {
    let engine = RiskEngine::default();
    let json = serde_json::to_value(engine.assess(&healthy_35())).unwrap();
    assert_eq!(json["life_expectancy"]["years"], 75.0);
    assert_eq!(json["recommendations"]["term_life_cover"], 500_000);
}
