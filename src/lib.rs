//! seqbench
//!
//! Measures the cost of keeping a sequence of integers sorted under random
//! insertion order, then emptying it through removals at random positions.
//! The contiguous `Vec` is the primary subject; `VecDeque` and `LinkedList`
//! run the same workload for comparison.
//!
//! ## Pipeline
//!
//! 1. [`WorkloadGenerator`] shuffles `1..=N` and draws `N` removal indexes
//!    from one owned, seedable PRNG.
//! 2. [`BenchmarkRunner`] builds a fresh container, inserts every value at
//!    its sorted position, removes at every index, and drops the container.
//! 3. [`timer::measure`] brackets step 2, teardown included.

pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod sequence;
pub mod timer;
pub mod workload;

// Re-exports
pub use bench::{format_elapsed, BenchReport, BenchmarkRunner, RunResult, RunSummary};
pub use config::BenchConfig;
pub use error::{BenchError, BenchResult};
pub use sequence::{ContainerKind, SequenceContainer};
pub use timer::TimingSample;
pub use workload::{ItemCount, Workload, WorkloadGenerator};
