//! Workload construction
//!
//! A workload is a random permutation of `1..=N` (insertion order) plus a
//! sequence of `N` removal positions, each valid against a container that
//! shrinks by one element per step.

pub mod generator;

pub use generator::WorkloadGenerator;

use crate::error::{BenchError, BenchResult};

/// Validated workload size (`0 < N <= i32::MAX`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemCount(usize);

impl ItemCount {
    pub fn new(raw: i64) -> BenchResult<Self> {
        if raw <= 0 || raw > i32::MAX as i64 {
            return Err(BenchError::InvalidItemCount(raw));
        }
        Ok(Self(raw as usize))
    }

    pub fn get(self) -> usize { self.0 }
}

impl std::fmt::Display for ItemCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable insertion values and removal positions for one benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    values: Vec<i32>,
    removal_indexes: Vec<usize>,
}

impl Workload {
    /// Build a workload from explicit sequences.
    ///
    /// Both sequences must have the same length and every removal index must
    /// be in range for the container size at its step.
    pub fn new(values: Vec<i32>, removal_indexes: Vec<usize>) -> Self {
        assert_eq!(
            values.len(),
            removal_indexes.len(),
            "workload sequences must have equal length"
        );
        let n = removal_indexes.len();
        for (step, &index) in removal_indexes.iter().enumerate() {
            assert!(
                index < n - step,
                "removal index {} out of range at step {} (size {})",
                index, step, n - step
            );
        }
        Self { values, removal_indexes }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Values in insertion order
    pub fn values(&self) -> &[i32] { &self.values }

    /// Positions to remove at, in removal order
    pub fn removal_indexes(&self) -> &[usize] { &self.removal_indexes }
}
