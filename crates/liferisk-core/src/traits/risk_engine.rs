use crate::errors::LifeRiskResult;
use crate::models::{LifeExpectancyEstimate, RiskResult, UserProfile};

/// Deterministic scoring of a profile. Implementations hold no mutable state.
pub trait IRiskEngine: Send + Sync {
    /// Annual mortality risk for one catalog disease.
    fn disease_risk(&self, disease_key: &str, profile: &UserProfile) -> LifeRiskResult<f64>;

    /// Annual mortality risk for every catalog disease, in catalog order.
    fn score_all(&self, profile: &UserProfile) -> RiskResult;

    /// Adjusted life expectancy, floor-clamped to `age + 1`.
    fn life_expectancy(&self, profile: &UserProfile) -> LifeExpectancyEstimate;
}
