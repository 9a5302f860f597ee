use serde::{Deserialize, Serialize};

use super::disease::display_name;

/// Annual mortality probability for one disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    pub key: String,
    pub annual_risk: f64,
}

impl DiseaseRisk {
    pub fn display_name(&self) -> String {
        display_name(&self.key)
    }

    /// Annual risk as a percentage.
    pub fn percent(&self) -> f64 {
        self.annual_risk * 100.0
    }
}

/// Disease key → annual risk, in catalog order. Produced fresh per scoring call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    risks: Vec<DiseaseRisk>,
}

impl RiskResult {
    pub fn new(risks: Vec<DiseaseRisk>) -> Self {
        Self { risks }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.risks
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.annual_risk)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiseaseRisk> {
        self.risks.iter()
    }

    pub fn len(&self) -> usize {
        self.risks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }

    /// Highest risk first. Equal risks keep catalog order.
    pub fn sorted_descending(&self) -> Vec<DiseaseRisk> {
        let mut sorted = self.risks.clone();
        sorted.sort_by(|a, b| b.annual_risk.total_cmp(&a.annual_risk));
        sorted
    }

    /// Diseases whose annual risk exceeds `threshold`, in catalog order.
    pub fn above(&self, threshold: f64) -> Vec<&DiseaseRisk> {
        self.risks
            .iter()
            .filter(|r| r.annual_risk > threshold)
            .collect()
    }
}

impl<'a> IntoIterator for &'a RiskResult {
    type Item = &'a DiseaseRisk;
    type IntoIter = std::slice::Iter<'a, DiseaseRisk>;

    fn into_iter(self) -> Self::IntoIter {
        self.risks.iter()
    }
}
