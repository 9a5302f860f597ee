//! Insurance cover suggestions derived from an assessment.

use liferisk_core::constants::{
    HIGH_RISK_THRESHOLD, MIN_TERM_COVERAGE, TERM_COVERAGE_PER_YEAR_OF_AGE,
};
use liferisk_core::models::RiskResult;
use serde::Serialize;

use crate::catalog::CRITICAL_ILLNESSES;

/// A cover range in lakhs plus its priority wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverRange {
    pub lakhs: &'static str,
    pub priority: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsuranceRecommendations {
    /// Disease keys whose annual risk exceeds the high-risk threshold, in catalog order.
    pub high_risk_diseases: Vec<String>,
    /// Recommended term life cover, in rupees.
    pub term_life_cover: u64,
    pub health_insurance: CoverRange,
    pub critical_illness: CoverRange,
}

impl InsuranceRecommendations {
    pub fn from_risks(age: u32, risks: &RiskResult) -> Self {
        let high_risk_diseases: Vec<String> = risks
            .above(HIGH_RISK_THRESHOLD)
            .into_iter()
            .map(|r| r.key.clone())
            .collect();

        let health_insurance = if high_risk_diseases.is_empty() {
            CoverRange {
                lakhs: "5-10",
                priority: "Standard Priority",
            }
        } else {
            CoverRange {
                lakhs: "10-15",
                priority: "High Priority",
            }
        };

        let critical = high_risk_diseases
            .iter()
            .any(|key| CRITICAL_ILLNESSES.contains(&key.as_str()));
        let critical_illness = if critical {
            CoverRange {
                lakhs: "25-50",
                priority: "Highly Recommended",
            }
        } else {
            CoverRange {
                lakhs: "10-25",
                priority: "Consider",
            }
        };

        Self {
            high_risk_diseases,
            term_life_cover: term_life_cover(age),
            health_insurance,
            critical_illness,
        }
    }

    pub fn has_high_risk(&self) -> bool {
        !self.high_risk_diseases.is_empty()
    }
}

/// `max(500_000, age * 10_000)` rupees.
pub fn term_life_cover(age: u32) -> u64 {
    MIN_TERM_COVERAGE.max(u64::from(age) * TERM_COVERAGE_PER_YEAR_OF_AGE)
}
