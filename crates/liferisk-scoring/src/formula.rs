use liferisk_core::models::{DiseaseProfile, UserProfile};
use serde::Serialize;

use crate::factors::RiskFactor;

/// Multiplicative disease risk formula.
///
/// ```text
/// annualRisk = baseAnnualDeathsPer100k / 100000
///   × Π multiplier(factor)   for every triggered factor
/// ```
///
/// Factors are applied in catalog order. The result is NOT clamped: extreme
/// profiles can push the product above 1.0.
pub fn compute_disease_risk(disease: &DiseaseProfile, profile: &UserProfile) -> f64 {
    let base_risk = disease.base_risk();

    let mut multiplier = 1.0;
    for weight in &disease.risk_factors {
        if let Some(applied) = RiskFactor::from_name(&weight.name)
            .and_then(|factor| factor.evaluate(weight.multiplier, &disease.key, profile))
        {
            multiplier *= applied;
        }
    }

    base_risk * multiplier
}

/// Outcome of one catalog factor for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorStatus {
    /// Predicate held; the multiplier was applied.
    Applied,
    /// Predicate did not hold.
    NotTriggered,
    /// No predicate exists for this name.
    NotEvaluated,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorContribution {
    pub name: String,
    /// Catalog weight.
    pub weight: f64,
    /// Multiplier actually applied (1.0 unless `Applied`).
    pub applied: f64,
    pub status: FactorStatus,
}

/// Each factor's contribution, for debugging and the report.
#[derive(Debug, Clone, Serialize)]
pub struct RiskBreakdown {
    pub disease_key: String,
    pub base_risk: f64,
    pub factors: Vec<FactorContribution>,
    pub multiplier: f64,
    pub annual_risk: f64,
}

/// Compute disease risk with a full breakdown of each factor.
pub fn compute_breakdown(disease: &DiseaseProfile, profile: &UserProfile) -> RiskBreakdown {
    let base_risk = disease.base_risk();

    let mut multiplier = 1.0;
    let factors: Vec<FactorContribution> = disease
        .risk_factors
        .iter()
        .map(|weight| {
            let (applied, status) = match RiskFactor::from_name(&weight.name) {
                None => (1.0, FactorStatus::NotEvaluated),
                Some(factor) => match factor.evaluate(weight.multiplier, &disease.key, profile) {
                    Some(applied) => {
                        multiplier *= applied;
                        (applied, FactorStatus::Applied)
                    }
                    None => (1.0, FactorStatus::NotTriggered),
                },
            };
            FactorContribution {
                name: weight.name.clone(),
                weight: weight.multiplier,
                applied,
                status,
            }
        })
        .collect();

    RiskBreakdown {
        disease_key: disease.key.clone(),
        base_risk,
        factors,
        multiplier,
        annual_risk: base_risk * multiplier,
    }
}
