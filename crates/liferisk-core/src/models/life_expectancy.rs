use serde::{Deserialize, Serialize};

/// Predicted age at death, in years. Never below `age + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeExpectancyEstimate {
    pub years: f64,
}

impl LifeExpectancyEstimate {
    pub fn new(years: f64) -> Self {
        Self { years }
    }

    /// `max(years - age, 0)`.
    pub fn years_remaining(&self, age: u32) -> f64 {
        (self.years - f64::from(age)).max(0.0)
    }
}
