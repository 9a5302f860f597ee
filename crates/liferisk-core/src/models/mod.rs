pub mod disease;
pub mod life_expectancy;
pub mod profile;
pub mod profile_input;
pub mod risk_result;
pub mod vocabulary;

pub use disease::{DiseaseProfile, RiskFactorWeight};
pub use life_expectancy::LifeExpectancyEstimate;
pub use profile::{
    compute_bmi, AlcoholConsumption, BmiCategory, ExerciseFrequency, Gender, SmokingStatus,
    UserProfile,
};
pub use profile_input::ProfileInput;
pub use risk_result::{DiseaseRisk, RiskResult};
