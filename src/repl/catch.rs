//! Catch rolls

use rand::Rng;

/// Base experience per point of catch difficulty.
pub const EXPERIENCE_PER_DIFFICULTY: u32 = 34;

/// Number of equally likely outcomes in a catch roll, only one of which
/// succeeds. Never less than 1.
pub fn catch_difficulty(base_experience: u32) -> u32 {
    (base_experience / EXPERIENCE_PER_DIFFICULTY).max(1)
}

/// Rolls for a catch: succeeds with probability `1 / catch_difficulty`.
pub fn attempt_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    rng.random_range(0..catch_difficulty(base_experience)) == 0
}
