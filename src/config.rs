//! Configuration for benchmark runs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BenchError, BenchResult};
use crate::sequence::ContainerKind;

/// Benchmark configuration, loadable from TOML. CLI flags override it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Strategies to time, in order
    pub containers: Vec<ContainerKind>,

    /// Timed repetitions per strategy
    pub runs: u32,

    /// Untimed cycles before measuring
    pub warmup: u32,

    /// Fixed PRNG seed; drawn from OS entropy when absent
    pub seed: Option<u64>,

    /// Print every intermediate container state
    pub trace: bool,

    /// Emit a JSON report instead of text lines
    pub json: bool,

    /// Default log filter (e.g. "warn", "info", "seqbench=debug")
    pub log_level: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            containers: vec![ContainerKind::Vec],
            runs: 1,
            warmup: 0,
            seed: None,
            trace: false,
            json: false,
            log_level: "warn".into(),
        }
    }
}

impl BenchConfig {
    /// Load config from TOML file
    pub fn load(path: &Path) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BenchError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| BenchError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save config to TOML file
    pub fn save(&self, path: &Path) -> BenchResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| BenchError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.runs == 0 {
            return Err(BenchError::InvalidRuns(self.runs));
        }
        if self.containers.is_empty() {
            return Err(BenchError::Config("no container strategies selected".into()));
        }
        Ok(())
    }
}
