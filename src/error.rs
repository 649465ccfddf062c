//! Error types for the benchmark harness
//!
//! Only recoverable conditions live here. A removal index out of range or a
//! malformed workload is a logic fault and panics instead.

use std::fmt;

/// Result alias used across the crate.
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors surfaced to the top-level boundary in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Workload size is not a positive integer that fits the value type
    InvalidItemCount(i64),
    /// Number of repetitions must be at least one
    InvalidRuns(u32),
    /// Config file could not be read or parsed
    Config(String),
    /// Writing benchmark output failed
    Io(String),
    /// Report serialization failed
    Serialize(String),
    /// Log subscriber could not be installed
    Logging(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidItemCount(n) => {
                write!(f, "Invalid number of items (must be > 0 and <= {}): {}", i32::MAX, n)
            }
            BenchError::InvalidRuns(runs) => write!(f, "Invalid number of runs (must be > 0): {}", runs),
            BenchError::Config(msg) => write!(f, "Config error: {}", msg),
            BenchError::Io(msg) => write!(f, "I/O error: {}", msg),
            BenchError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            BenchError::Logging(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for BenchError {}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialize(err.to_string())
    }
}
