use liferisk_core::constants::FORMER_SMOKER_SCALE;
use liferisk_core::models::SmokingStatus;

/// Smoking multiplier.
///
/// Current smokers get the full factor, former smokers half of it,
/// never-smokers none.
pub fn calculate(status: SmokingStatus, factor: f64) -> Option<f64> {
    match status {
        SmokingStatus::CurrentSmoker => Some(factor),
        SmokingStatus::FormerQuit => Some(factor * FORMER_SMOKER_SCALE),
        SmokingStatus::Never => None,
    }
}
