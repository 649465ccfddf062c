//! Benchmark runner for the sorted-insert / random-remove cycle

use std::collections::{LinkedList, VecDeque};
use std::hint::black_box;
use std::io::{self, Write};

use tracing::{debug, info};

use super::metrics::RunResult;
use crate::error::{BenchError, BenchResult};
use crate::sequence::{ContainerKind, SequenceContainer};
use crate::timer::{self, TimingSample};
use crate::workload::Workload;

/// Hooks invoked after each step of a cycle.
pub trait CycleObserver {
    fn on_insert<C: SequenceContainer>(&mut self, _value: i32, _container: &C) {}

    fn on_filled<C: SequenceContainer>(&mut self, _container: &C) {}

    fn on_remove<C: SequenceContainer>(&mut self, _index: usize, _value: i32, _container: &C) {}
}

/// Observer for timed runs
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}

/// Writes every intermediate container state as it happens.
///
/// Write errors do not interrupt the cycle; the first one is kept and
/// returned by [`TraceObserver::finish`]. Later steps are skipped.
pub struct TraceObserver<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TraceObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand the writer back, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_values(out: &mut W, values: &[i32]) -> io::Result<()> {
        if values.is_empty() {
            return write!(out, "<< empty >>");
        }
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{}", value)?;
        }
        Ok(())
    }

    fn record<F: FnOnce(&mut W) -> io::Result<()>>(&mut self, step: F) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = step(&mut self.out) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> CycleObserver for TraceObserver<W> {
    fn on_insert<C: SequenceContainer>(&mut self, value: i32, container: &C) {
        let snapshot = container.to_vec();
        self.record(|out| {
            write!(out, "Inserting {}:  ", value)?;
            Self::write_values(out, &snapshot)?;
            writeln!(out)
        });
    }

    fn on_filled<C: SequenceContainer>(&mut self, container: &C) {
        let snapshot = container.to_vec();
        self.record(|out| {
            write!(out, "\nComplete sequence: ")?;
            Self::write_values(out, &snapshot)?;
            writeln!(out, "\n")
        });
    }

    fn on_remove<C: SequenceContainer>(&mut self, index: usize, value: i32, container: &C) {
        let snapshot = container.to_vec();
        self.record(|out| {
            write!(out, "Removing {} (at index {}):  ", value, index)?;
            Self::write_values(out, &snapshot)?;
            writeln!(out)
        });
    }
}

/// One full cycle against a fresh `C`, timed from construction through drop.
pub fn run_cycle<C: SequenceContainer, O: CycleObserver>(workload: &Workload, observer: &mut O) -> TimingSample {
    let ((), sample) = timer::measure(|| {
        let mut container = C::new();
        for &value in workload.values() {
            container.insert_sorted(value);
            observer.on_insert(value, &container);
        }
        observer.on_filled(&container);

        for &index in workload.removal_indexes() {
            let value = container.remove_at(index);
            observer.on_remove(index, value, &container);
        }
        debug_assert!(container.is_empty(), "{} not empty after removals", C::LABEL);

        drop(black_box(container));
    });
    sample
}

fn cycle_for<O: CycleObserver>(kind: ContainerKind, workload: &Workload, observer: &mut O) -> TimingSample {
    match kind {
        ContainerKind::Vec => run_cycle::<Vec<i32>, O>(workload, observer),
        ContainerKind::VecDeque => run_cycle::<VecDeque<i32>, O>(workload, observer),
        ContainerKind::LinkedList => run_cycle::<LinkedList<i32>, O>(workload, observer),
    }
}

/// Stream a step-by-step listing of one cycle into `out`. The timing is discarded.
pub fn trace_cycle<W: Write>(kind: ContainerKind, workload: &Workload, out: W) -> io::Result<W> {
    let mut observer = TraceObserver::new(out);
    cycle_for(kind, workload, &mut observer);
    observer.finish()
}

pub struct BenchmarkRunner {
    runs: u32,
    warmup: u32,
}

impl BenchmarkRunner {
    pub fn new(runs: u32) -> BenchResult<Self> {
        if runs == 0 {
            return Err(BenchError::InvalidRuns(runs));
        }
        Ok(Self { runs, warmup: 0 })
    }

    pub fn with_warmup(mut self, warmup: u32) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn runs(&self) -> u32 { self.runs }

    pub fn run(&self, kind: ContainerKind, workload: &Workload) -> Vec<RunResult> {
        for _ in 0..self.warmup {
            cycle_for(kind, workload, &mut NoopObserver);
        }
        if self.warmup > 0 {
            debug!("{}: {} warmup cycles done", kind, self.warmup);
        }

        let mut results = Vec::with_capacity(self.runs as usize);
        for run in 1..=self.runs {
            let sample = cycle_for(kind, workload, &mut NoopObserver);
            let elapsed_ms = sample.elapsed_ms();
            info!("{} run {}/{}: {:.3} ms ({} items)", kind, run, self.runs, elapsed_ms, workload.len());
            results.push(RunResult {
                kind,
                items: workload.len(),
                run,
                elapsed_ms,
            });
        }
        results
    }

    pub fn run_all(&self, kinds: &[ContainerKind], workload: &Workload) -> Vec<RunResult> {
        kinds.iter().flat_map(|&kind| self.run(kind, workload)).collect()
    }
}
