//! seqbench - sorted-insert / random-remove container benchmark

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

use seqbench::bench::{format_summary, trace_cycle};
use seqbench::logging::init_logging;
use seqbench::{
    format_elapsed, BenchConfig, BenchReport, BenchResult, BenchmarkRunner, ContainerKind, ItemCount,
    RunSummary, WorkloadGenerator,
};

#[derive(Parser)]
#[command(name = "seqbench")]
#[command(about = "Time sorted insertion and random removal on sequence containers", long_about = None)]
struct Cli {
    /// Number of items used for testing
    #[arg(allow_negative_numbers = true)]
    items: i64,

    /// Container strategy to time (repeatable)
    #[arg(short, long, value_enum)]
    container: Vec<ContainerKind>,

    /// Time every container strategy
    #[arg(long, conflicts_with = "container")]
    all: bool,

    /// Timed repetitions per strategy
    #[arg(short, long)]
    runs: Option<u32>,

    /// Untimed cycles before measuring
    #[arg(long)]
    warmup: Option<u32>,

    /// Fixed PRNG seed for a reproducible workload
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every intermediate container state
    #[arg(long)]
    trace: bool,

    /// Emit a JSON report
    #[arg(long)]
    json: bool,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overrides RUST_LOG and the config file
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut BenchConfig) {
        if self.all {
            config.containers = ContainerKind::ALL.to_vec();
        } else if !self.container.is_empty() {
            config.containers = self.container.clone();
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if let Some(warmup) = self.warmup {
            config.warmup = warmup;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.trace |= self.trace;
        config.json |= self.json;
    }
}

fn run(cli: Cli) -> BenchResult<()> {
    let count = ItemCount::new(cli.items)?;

    let mut config = match &cli.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    init_logging(cli.log_level.as_deref(), &config.log_level)?;

    let runner = BenchmarkRunner::new(config.runs)?.with_warmup(config.warmup);

    let started_at = chrono::Utc::now();
    let mut generator = match config.seed {
        Some(seed) => WorkloadGenerator::from_seed(seed),
        None => WorkloadGenerator::from_entropy(),
    };
    let seed = generator.seed();
    info!("Generating workload: {} items, seed {:?}", count, seed);
    let workload = generator.generate(count);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.json {
        if config.trace {
            warn!("--trace is ignored with --json output");
        }
        let results = runner.run_all(&config.containers, &workload);
        let report = BenchReport::new(count.get(), seed, started_at, results);
        writeln!(out, "{}", report.to_json()?)?;
        return Ok(());
    }

    writeln!(out, "Sequence insertion/removal benchmark")?;
    match seed {
        Some(seed) => writeln!(out, "{} items, seed {}\n", count, seed)?,
        None => writeln!(out, "{} items\n", count)?,
    }

    if config.trace {
        for &kind in &config.containers {
            writeln!(out, "*** {} trace ***\n", kind)?;
            trace_cycle(kind, &workload, &mut out)?;
            writeln!(out)?;
        }
    }

    let mut results = Vec::new();
    for &kind in &config.containers {
        let kind_results = runner.run(kind, &workload);
        for r in &kind_results {
            writeln!(out, "{}", format_elapsed(r.label(), r.elapsed_ms))?;
        }
        results.extend(kind_results);
    }

    if runner.runs() > 1 {
        writeln!(out)?;
        for summary in RunSummary::from_results(&results) {
            writeln!(out, "{}", format_summary(&summary))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n*** ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
