use serde::{Deserialize, Serialize};

use crate::constants;

/// One named relative-risk multiplier on a disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactorWeight {
    pub name: String,
    pub multiplier: f64,
}

/// Static catalog entry: base incidence plus relative-risk multipliers.
///
/// Factor names are matched against known predicates at scoring time;
/// names without a predicate are carried but never applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub key: String,
    pub base_annual_deaths_per_100k: f64,
    pub risk_factors: Vec<RiskFactorWeight>,
}

impl DiseaseProfile {
    pub fn new(key: &str, base_annual_deaths_per_100k: f64, factors: &[(&str, f64)]) -> Self {
        Self {
            key: key.to_string(),
            base_annual_deaths_per_100k,
            risk_factors: factors
                .iter()
                .map(|(name, multiplier)| RiskFactorWeight {
                    name: (*name).to_string(),
                    multiplier: *multiplier,
                })
                .collect(),
        }
    }

    /// Annual probability before any multiplier.
    pub fn base_risk(&self) -> f64 {
        self.base_annual_deaths_per_100k / constants::DEATHS_PER_100K_DIVISOR
    }

    pub fn factor(&self, name: &str) -> Option<f64> {
        self.risk_factors
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.multiplier)
    }

    /// `heart_disease` → `Heart Disease`.
    pub fn display_name(&self) -> String {
        display_name(&self.key)
    }
}

/// Title-case a snake_case disease key.
pub fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_title_cases_keys() {
        assert_eq!(display_name("heart_disease"), "Heart Disease");
        assert_eq!(display_name("copd"), "Copd");
    }

    #[test]
    fn base_risk_divides_by_100k() {
        let d = DiseaseProfile::new("x", 162.1, &[]);
        assert_eq!(d.base_risk(), 162.1 / 100_000.0);
    }
}
