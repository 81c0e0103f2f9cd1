//! RNG module - deterministic random source for maze carving
//!
//! A small LCG is enough for picking corridor directions and keeps generation
//! reproducible: the same seed always carves the same maze.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Re-seed in place, dropping all previous state
    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the state; the low bits of a power-of-two LCG cycle
    /// with a very short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Seed derived from the wall clock, for "fresh maze" requests.
pub fn seed_from_clock() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the 128-bit nanosecond count so both seconds and sub-second bits count.
    (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = SimpleRng::new(7);
        let first: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
        rng.reseed(7);
        let again: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_next_range_stays_in_bounds_and_covers_values() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = rng.next_range(4);
            assert!(v < 4);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(rng.next_range(0), 0);
    }
}
