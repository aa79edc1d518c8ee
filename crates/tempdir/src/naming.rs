//! Unique directory name generation

use chrono::Utc;
use rand::Rng;

/// Smallest random suffix
pub const RANDOM_MIN: u32 = 10_000;
/// Largest random suffix
pub const RANDOM_MAX: u32 = 99_999;

/// Generate `<prefix>_<millis since epoch>_<random>`.
///
/// Collisions are unlikely but possible; callers create the directory
/// exclusively and ask for another name if it already exists.
#[must_use]
pub fn generate_dir_name(prefix: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let random = rand::rng().random_range(RANDOM_MIN..=RANDOM_MAX);
    format!("{prefix}_{timestamp}_{random}")
}
