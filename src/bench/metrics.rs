//! Benchmark results and reporting

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::BenchResult;
use crate::sequence::ContainerKind;

/// One timed insert/remove cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub kind: ContainerKind,
    pub items: usize,
    pub run: u32,
    pub elapsed_ms: f64,
}

impl RunResult {
    pub fn label(&self) -> &'static str { self.kind.label() }
}

/// Aggregate over all runs of one strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub kind: ContainerKind,
    pub runs: usize,
    pub min_ms: f64,
    pub avg_ms: f64,
    pub max_ms: f64,
}

impl RunSummary {
    pub fn label(&self) -> &'static str { self.kind.label() }

    /// Group results by strategy, in first-seen order.
    pub fn from_results(results: &[RunResult]) -> Vec<RunSummary> {
        let mut summaries: Vec<RunSummary> = Vec::new();
        for r in results {
            match summaries.iter_mut().find(|s| s.kind == r.kind) {
                Some(s) => {
                    s.min_ms = s.min_ms.min(r.elapsed_ms);
                    s.max_ms = s.max_ms.max(r.elapsed_ms);
                    // running sum until the final pass below
                    s.avg_ms += r.elapsed_ms;
                    s.runs += 1;
                }
                None => summaries.push(RunSummary {
                    kind: r.kind,
                    runs: 1,
                    min_ms: r.elapsed_ms,
                    avg_ms: r.elapsed_ms,
                    max_ms: r.elapsed_ms,
                }),
            }
        }
        for s in &mut summaries {
            s.avg_ms /= s.runs as f64;
        }
        summaries
    }
}

/// Full output of one invocation
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub items: usize,
    pub seed: Option<u64>,
    pub started_at: DateTime<Utc>,
    pub results: Vec<RunResult>,
    pub summaries: Vec<RunSummary>,
}

impl BenchReport {
    pub fn new(items: usize, seed: Option<u64>, started_at: DateTime<Utc>, results: Vec<RunResult>) -> Self {
        let summaries = RunSummary::from_results(&results);
        Self { items, seed, started_at, results, summaries }
    }

    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `"<label> time: <ms> ms"`
pub fn format_elapsed(label: &str, elapsed_ms: f64) -> String {
    format!("{} time: {:.3} ms", label, elapsed_ms)
}

pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "{} over {} runs: min {:.3} ms, avg {:.3} ms, max {:.3} ms",
        summary.label(), summary.runs, summary.min_ms, summary.avg_ms, summary.max_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: ContainerKind, run: u32, ms: f64) -> RunResult {
        RunResult { kind, items: 10, run, elapsed_ms: ms }
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed("Vec", 500.0), "Vec time: 500.000 ms");
        assert_eq!(format_elapsed("LinkedList", 1.23456), "LinkedList time: 1.235 ms");
    }

    #[test]
    fn test_summary_min_avg_max() {
        let results = vec![
            result(ContainerKind::Vec, 1, 2.0),
            result(ContainerKind::LinkedList, 1, 10.0),
            result(ContainerKind::Vec, 2, 4.0),
            result(ContainerKind::Vec, 3, 6.0),
        ];
        let summaries = RunSummary::from_results(&results);
        assert_eq!(summaries.len(), 2);

        let vec = &summaries[0];
        assert_eq!(vec.kind, ContainerKind::Vec);
        assert_eq!(vec.runs, 3);
        assert_eq!(vec.min_ms, 2.0);
        assert_eq!(vec.avg_ms, 4.0);
        assert_eq!(vec.max_ms, 6.0);

        let list = &summaries[1];
        assert_eq!(list.runs, 1);
        assert_eq!(list.avg_ms, 10.0);
        assert_eq!(
            format_summary(list),
            "LinkedList over 1 runs: min 10.000 ms, avg 10.000 ms, max 10.000 ms"
        );
    }

    #[test]
    fn test_report_json() {
        let started_at = DateTime::parse_from_rfc3339("2024-04-05T10:00:00Z").unwrap().with_timezone(&Utc);
        let report = BenchReport::new(10, Some(42), started_at, vec![result(ContainerKind::VecDeque, 1, 1.5)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["items"], 10);
        assert_eq!(json["seed"], 42);
        assert_eq!(json["results"][0]["kind"], "vec-deque");
        assert_eq!(json["results"][0]["elapsed_ms"], 1.5);
        assert_eq!(json["summaries"][0]["kind"], "vec-deque");
        assert!(json["results"][0].get("label").is_none());
        assert_eq!(report.summaries[0].label(), "VecDeque");
        assert_eq!(json["started_at"], "2024-04-05T10:00:00Z");
    }
}
