//! Shared fixtures for the wsnkey integration tests

pub mod vectors;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for a test, one stream per seed byte
pub fn seeded_rng(seed: u8) -> ChaCha20Rng {
    ChaCha20Rng::from_seed([seed; 32])
}
