use serde::Serialize;

/// Display band of an annual risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Elevated,
    High,
}

impl RiskTier {
    /// Band for a risk expressed as a percentage (`annual_risk * 100`).
    pub fn from_percent(percent: f64) -> Self {
        if percent > 0.5 {
            Self::High
        } else if percent > 0.1 {
            Self::Elevated
        } else {
            Self::Low
        }
    }

    /// Band for an annual probability.
    pub fn from_annual_risk(annual_risk: f64) -> Self {
        Self::from_percent(annual_risk * 100.0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Elevated => "Elevated",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
