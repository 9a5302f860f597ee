//! # liferisk-scoring
//!
//! Deterministic risk scoring.
//! Per-disease annual mortality risk is the catalog base rate times every
//! triggered risk-factor multiplier. Life expectancy is the country baseline
//! plus additive lifestyle adjustments, floored at `age + 1`.

pub mod catalog;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod life_expectancy;
pub mod recommendations;
pub mod tiers;

pub use engine::{Assessment, RiskEngine};
pub use formula::{compute_disease_risk, FactorContribution, FactorStatus, RiskBreakdown};
pub use life_expectancy::{compute_life_expectancy, Adjustment, LifeExpectancyBreakdown};
pub use recommendations::InsuranceRecommendations;
pub use tiers::RiskTier;
