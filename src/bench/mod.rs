//! Benchmark suite for sequence containers
//!
//! - [`runner`] runs timed insert/remove cycles per strategy
//! - [`metrics`] aggregates and formats the results

pub mod metrics;
pub mod runner;

pub use metrics::{format_elapsed, format_summary, BenchReport, RunResult, RunSummary};
pub use runner::{run_cycle, trace_cycle, BenchmarkRunner, CycleObserver, NoopObserver, TraceObserver};
