//! Power-on noise source.
//!
//! A physical machine comes up with whatever bit patterns its flip-flops and
//! core memory happened to settle into. The simulator models this with a
//! xorshift generator, which is cheap and reproducible when seeded.

use std::time::{SystemTime, UNIX_EPOCH};

use super::word::{Word, WordWidth};

/// Seed used when the caller supplies zero (xorshift never leaves zero).
const FALLBACK_SEED: u64 = 123456789;

/// Pseudo-random word generator used to scramble registers and memory.
#[derive(Clone, Debug)]
pub struct NoiseSource {
    state: u64,
}

impl NoiseSource {
    /// Creates a generator from an explicit seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - Initial state; zero is replaced by a fixed non-zero seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a generator seeded from the wall clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(FALLBACK_SEED, |d| d.as_nanos() as u64);
        Self::new(nanos)
    }

    /// Advances the generator and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns a random word of the given width.
    pub fn next_word(&mut self, width: WordWidth) -> Word {
        // Low bits of xorshift64 are the weakest; take the word from the top.
        width.truncate(self.next_u64() >> (64 - width.bits()))
    }
}
