use std::borrow::Cow;
use std::path::Path;

use liferisk_baseline::{BaselineTable, CountryResolver};
use liferisk_core::config::BaselineConfig;
use liferisk_core::constants::HIGH_RISK_THRESHOLD;
use liferisk_core::errors::{BaselineError, LifeRiskResult, ScoringError};
use liferisk_core::models::{
    DiseaseProfile, DiseaseRisk, LifeExpectancyEstimate, RiskResult, UserProfile,
};
use liferisk_core::traits::IRiskEngine;
use liferisk_core::tracing::events;
use serde::Serialize;

use crate::catalog;
use crate::formula::{self, RiskBreakdown};
use crate::life_expectancy::{self, LifeExpectancyBreakdown};
use crate::recommendations::InsuranceRecommendations;

/// Everything computed for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub risks: RiskResult,
    pub life_expectancy: LifeExpectancyEstimate,
    pub years_remaining: f64,
    pub recommendations: InsuranceRecommendations,
}

/// Scores profiles against a disease catalog and a baseline table.
///
/// Holds no mutable state; safe to share across threads.
pub struct RiskEngine {
    catalog: Cow<'static, [DiseaseProfile]>,
    baseline: BaselineTable,
    resolver: CountryResolver,
}

impl RiskEngine {
    /// Engine over the built-in catalog.
    pub fn new(baseline: BaselineTable) -> Self {
        Self {
            catalog: Cow::Borrowed(catalog::catalog()),
            baseline,
            resolver: CountryResolver::default(),
        }
    }

    /// Replace the disease catalog.
    pub fn with_catalog(mut self, catalog: Vec<DiseaseProfile>) -> Self {
        self.catalog = Cow::Owned(catalog);
        self
    }

    pub fn with_resolver(mut self, resolver: CountryResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Load the baseline dataset named by `config`.
    pub fn from_config(config: &BaselineConfig) -> Result<Self, BaselineError> {
        let table = BaselineTable::load(Path::new(&config.dataset_path))?
            .with_fallback(config.fallback_life_expectancy);
        tracing::debug!(
            country = %config.default_country,
            fallback = config.fallback_life_expectancy,
            "risk engine configured"
        );
        Ok(Self::new(table).with_resolver(CountryResolver::new(&config.default_country)))
    }

    pub fn catalog(&self) -> &[DiseaseProfile] {
        &self.catalog
    }

    pub fn baseline(&self) -> &BaselineTable {
        &self.baseline
    }

    pub fn resolver(&self) -> &CountryResolver {
        &self.resolver
    }

    fn disease(&self, key: &str) -> Result<&DiseaseProfile, ScoringError> {
        self.catalog
            .iter()
            .find(|d| d.key == key)
            .ok_or_else(|| ScoringError::DiseaseNotFound {
                key: key.to_string(),
            })
    }

    /// Annual mortality risk for the disease named `key`.
    pub fn compute_disease_risk_by_key(
        &self,
        key: &str,
        profile: &UserProfile,
    ) -> Result<f64, ScoringError> {
        let disease = self.disease(key)?;
        Ok(formula::compute_disease_risk(disease, profile))
    }

    /// Per-factor breakdown for the disease named `key`.
    pub fn risk_breakdown(
        &self,
        key: &str,
        profile: &UserProfile,
    ) -> Result<RiskBreakdown, ScoringError> {
        let disease = self.disease(key)?;
        Ok(formula::compute_breakdown(disease, profile))
    }

    pub fn score_all(&self, profile: &UserProfile) -> RiskResult {
        RiskResult::new(
            self.catalog
                .iter()
                .map(|disease| DiseaseRisk {
                    key: disease.key.clone(),
                    annual_risk: formula::compute_disease_risk(disease, profile),
                })
                .collect(),
        )
    }

    pub fn life_expectancy(&self, profile: &UserProfile) -> LifeExpectancyEstimate {
        let country = self.resolver.resolve(&profile.city);
        LifeExpectancyEstimate::new(life_expectancy::compute_life_expectancy(
            country,
            profile,
            &self.baseline,
        ))
    }

    pub fn life_expectancy_breakdown(&self, profile: &UserProfile) -> LifeExpectancyBreakdown {
        let country = self.resolver.resolve(&profile.city);
        life_expectancy::compute_breakdown(country, profile, &self.baseline)
    }

    /// Score every disease, estimate life expectancy and derive cover suggestions.
    pub fn assess(&self, profile: &UserProfile) -> Assessment {
        let risks = self.score_all(profile);
        let life_expectancy = self.life_expectancy(profile);
        let recommendations = InsuranceRecommendations::from_risks(profile.age, &risks);

        events::assessment_completed(
            risks.len(),
            life_expectancy.years,
            risks.above(HIGH_RISK_THRESHOLD).len(),
        );

        Assessment {
            years_remaining: life_expectancy.years_remaining(profile.age),
            risks,
            life_expectancy,
            recommendations,
        }
    }

    /// Assess independent profiles, in input order.
    pub fn assess_batch(&self, profiles: &[UserProfile]) -> Vec<Assessment> {
        profiles.iter().map(|p| self.assess(p)).collect()
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(BaselineTable::default())
    }
}

impl IRiskEngine for RiskEngine {
    fn disease_risk(&self, disease_key: &str, profile: &UserProfile) -> LifeRiskResult<f64> {
        Ok(self.compute_disease_risk_by_key(disease_key, profile)?)
    }

    fn score_all(&self, profile: &UserProfile) -> RiskResult {
        RiskEngine::score_all(self, profile)
    }

    fn life_expectancy(&self, profile: &UserProfile) -> LifeExpectancyEstimate {
        RiskEngine::life_expectancy(self, profile)
    }
}
