//! Log subscriber setup
//!
//! Logs go to stderr; stdout is reserved for benchmark output.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{BenchError, BenchResult};

/// Pick the log filter: an explicit level wins, then `RUST_LOG`, then `fallback`.
pub fn build_filter(explicit: Option<&str>, fallback: &str) -> BenchResult<EnvFilter> {
    if let Some(level) = explicit {
        return EnvFilter::try_new(level).map_err(|e| BenchError::Logging(format!("{}: {}", level, e)));
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback).map_err(|e| BenchError::Logging(format!("{}: {}", fallback, e))),
    }
}

pub fn init_logging(explicit: Option<&str>, fallback: &str) -> BenchResult<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(build_filter(explicit, fallback)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| BenchError::Logging(e.to_string()))
}
