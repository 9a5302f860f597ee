use liferisk_core::models::{LifeExpectancyEstimate, RiskResult, UserProfile};

/// Analysis requests appended to every prompt.
const ANALYSIS_REQUESTS: [&str; 4] = [
    "A detailed 4-5 sentence risk assessment highlighting the top 3 concerns",
    "Specific recommendations to reduce the highest risks",
    "Appropriate insurance recommendations based on the risk profile",
    "Lifestyle modifications that could add years to life expectancy",
];

fn join_or_none<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

/// Build the analysis prompt for one assessment.
///
/// Diseases are listed in catalog order with the percentage to three decimals.
pub fn build_prompt(
    profile: &UserProfile,
    risks: &RiskResult,
    life_expectancy: &LifeExpectancyEstimate,
) -> String {
    let mut lines = vec![
        "Analyze this comprehensive health profile:".to_string(),
        String::new(),
        format!(
            "Demographics: Age {}, {}, BMI {:.1}",
            profile.age, profile.gender, profile.bmi
        ),
        format!("Smoking: {}", profile.smoking_status),
        format!(
            "Health Conditions: {}",
            join_or_none(&profile.health_conditions)
        ),
        format!("Family History: {}", join_or_none(&profile.family_history)),
        format!("Exercise: {}", profile.exercise_frequency),
        format!("Sleep: {} hours", profile.sleep_hours),
        format!("Stress Level: {}/10", profile.stress_level),
        String::new(),
        "Disease-Specific Annual Mortality Risks:".to_string(),
    ];

    lines.extend(risks.iter().map(|risk| {
        format!(
            "- {}: {:.3}% annual risk",
            risk.display_name(),
            risk.percent()
        )
    }));

    lines.push(String::new());
    lines.push(format!(
        "Predicted Life Expectancy: {:.1} years",
        life_expectancy.years
    ));
    lines.push(String::new());
    lines.push("Provide:".to_string());
    lines.extend(
        ANALYSIS_REQUESTS
            .iter()
            .enumerate()
            .map(|(i, request)| format!("{}. {request}", i + 1)),
    );
    lines.push(String::new());
    lines.push("Be specific about which diseases pose the highest risk and why.".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use liferisk_core::models::DiseaseRisk;

    #[test]
    fn empty_lists_print_none() {
        let prompt = build_prompt(
            &UserProfile::default(),
            &RiskResult::default(),
            &LifeExpectancyEstimate::new(72.0),
        );
        assert!(prompt.contains("Health Conditions: None\n"));
        assert!(prompt.contains("Family History: None\n"));
        assert!(prompt.contains("Predicted Life Expectancy: 72.0 years\n"));
    }

    #[test]
    fn risks_use_display_names() {
        let risks = RiskResult::new(vec![DiseaseRisk {
            key: "heart_disease".into(),
            annual_risk: 0.001621,
        }]);
        let prompt = build_prompt(
            &UserProfile::default(),
            &risks,
            &LifeExpectancyEstimate::new(75.0),
        );
        assert!(prompt.contains("- Heart Disease: 0.162% annual risk"));
    }
}
