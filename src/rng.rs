//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps a seedable `StdRng` and exposes the
//! handful of draws the solver needs: cell values, vector positions, distinct
//! position pairs and shuffles. Every random decision of an evolution run goes
//! through one generator, so a fixed seed reproduces a run exactly.
//!
//! ## Example
//!
//! ```rust
//! use futoshiki_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let vector = rng.random_vector(4, 10);
//!
//! assert_eq!(vector.len(), 10);
//! assert!(vector.iter().all(|v| (1..=4).contains(v)));
//! ```

use rand::{
    rngs::StdRng,
    seq::{index, SliceRandom},
    Rng, SeedableRng,
};

/// A wrapper around the `rand` crate's `StdRng` with solver-specific draws.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a cell value uniformly from `1..=dimension`.
    pub fn gen_value(&mut self, dimension: usize) -> usize {
        self.rng.gen_range(1..=dimension)
    }

    /// Draws a position uniformly from `0..len`.
    ///
    /// `len` must be positive.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws an integer uniformly from `low..=high`.
    pub fn gen_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    /// Draws two distinct positions from `0..len`.
    ///
    /// Returns `None` when `len < 2`.
    pub fn distinct_pair(&mut self, len: usize) -> Option<(usize, usize)> {
        if len < 2 {
            return None;
        }
        let picked = index::sample(&mut self.rng, len, 2);
        Some((picked.index(0), picked.index(1)))
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Picks one element of a slice uniformly, or `None` if it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Generates `len` values, each uniform in `1..=dimension`.
    pub fn random_vector(&mut self, dimension: usize, len: usize) -> Vec<usize> {
        (0..len).map(|_| self.gen_value(dimension)).collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
