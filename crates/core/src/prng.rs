//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! All randomness in the simulation flows through this generator so that a
//! given seed reproduces the same particle field bit-for-bit across runs and
//! platforms (pure integer arithmetic in the core algorithm).

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is automatically
/// replaced with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f32 in [0, 1).
    ///
    /// Uses the upper 24 bits of `next_u64()` divided by 2^24 for full
    /// single-precision mantissa coverage.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Returns a uniformly distributed f32 in [min, max).
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a uniformly distributed angle in [0, 2π).
    pub fn next_angle(&mut self) -> f32 {
        self.next_f32() * std::f32::consts::TAU
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Uses simple modulo reduction. For non-power-of-two `max` values,
    /// this introduces negligible bias at 64-bit state width.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0 (division by zero in modulo).
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }
}
