//! Seeded workload generator
//!
//! The generator owns its PRNG. `generate` always draws the value
//! permutation before the removal indexes; pinning a seed therefore pins the
//! whole workload.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{ItemCount, Workload};

pub struct WorkloadGenerator<R: Rng = StdRng> {
    rng: R,
    seed: Option<u64>,
}

impl WorkloadGenerator<StdRng> {
    /// Deterministic generator for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), seed: Some(seed) }
    }

    /// Seed from OS entropy. The drawn seed is kept so the run can be replayed.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::from_seed(seed)
    }
}

impl<R: Rng> WorkloadGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, seed: None }
    }

    /// Seed used to build the PRNG, if it is known
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// Numbers `1..=n` in uniformly random order (Fisher-Yates).
    pub fn generate_values(&mut self, n: usize) -> Vec<i32> {
        assert!(n > 0 && n <= i32::MAX as usize, "item count out of range: {}", n);

        let mut values: Vec<i32> = (1..=n as i32).collect();
        values.shuffle(&mut self.rng);
        values
    }

    /// One removal position per step against a container of size `n - i`.
    ///
    /// ```text
    /// i = 0     -> 0..=n-1
    /// i = 1     -> 0..=n-2
    /// i = n-1   -> 0 (single element left, no draw)
    /// ```
    pub fn generate_removal_indexes(&mut self, n: usize) -> Vec<usize> {
        assert!(n > 0, "item count must be positive");

        let mut indexes = Vec::with_capacity(n);
        for i in 0..n - 1 {
            indexes.push(self.rng.gen_range(0..=n - i - 1));
        }
        indexes.push(0);
        indexes
    }

    pub fn generate(&mut self, count: ItemCount) -> Workload {
        let n = count.get();
        let values = self.generate_values(n);
        let removal_indexes = self.generate_removal_indexes(n);
        debug!("Generated workload: {} values, {} removal indexes", values.len(), removal_indexes.len());
        Workload::new(values, removal_indexes)
    }
}
