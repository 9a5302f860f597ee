//! # liferisk-core
//!
//! Foundation crate for the LifeRisk assessment engine.
//! Defines the profile and catalog types, traits, errors, config, constants,
//! and the tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::LifeRiskConfig;
pub use errors::{LifeRiskError, LifeRiskResult};
pub use models::{
    AlcoholConsumption, DiseaseProfile, DiseaseRisk, ExerciseFrequency, Gender,
    LifeExpectancyEstimate, ProfileInput, RiskResult, SmokingStatus, UserProfile,
};
