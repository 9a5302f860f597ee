use liferisk_core::models::UserProfile;

pub const OVER_50: u32 = 50;
pub const OVER_65: u32 = 65;

/// Strictly older than `threshold`.
pub fn is_over(profile: &UserProfile, threshold: u32) -> bool {
    profile.age > threshold
}
