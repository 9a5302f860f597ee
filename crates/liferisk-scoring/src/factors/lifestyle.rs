use liferisk_core::constants::OBESITY_BMI;
use liferisk_core::models::{ExerciseFrequency, UserProfile};

pub fn is_obese(profile: &UserProfile) -> bool {
    profile.bmi >= OBESITY_BMI
}

pub fn is_sedentary(profile: &UserProfile) -> bool {
    profile.exercise_frequency == ExerciseFrequency::Never
}
