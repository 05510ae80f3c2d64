//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected so shuffles are repeatable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// `StdRng`-backed generator. Seed it for reproducible runs, or draw the
/// seed from the operating system when order should differ every session.
#[derive(Debug, Clone)]
pub struct SeededRng(StdRng);

impl SeededRng {
    /// Creates a generator whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl DeterministicRng for SeededRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        self.0.random()
    }
}

/// Shuffles `items` in place with a Fisher–Yates pass driven by `rng`.
#[allow(clippy::cast_possible_truncation)]
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_u32_range(0, i as u32) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_shuffle() {
        let mut a: Vec<u8> = (0..6).collect();
        let mut b = a.clone();

        shuffle(&mut a, &mut SeededRng::seed_from_u64(7));
        shuffle(&mut b, &mut SeededRng::seed_from_u64(7));

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut items: Vec<u8> = (0..6).collect();

        shuffle(&mut items, &mut SeededRng::seed_from_u64(42));

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_next_u32_range_stays_in_bounds() {
        let mut rng = SeededRng::seed_from_u64(1);
        for _ in 0..100 {
            let v = rng.next_u32_range(2, 4);
            assert!((2..=4).contains(&v));
        }
    }
}
