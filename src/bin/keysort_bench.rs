//! `keysort-bench` times the bucket sort engine against the standard
//! library's stable sort over a synthetic keyed population.
//!
//! Prints one `Min:/Max:/Total:` line (milliseconds) per phase. A correctness
//! violation in the engine phase aborts the run with a nonzero exit code.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use keysort::bench;
use keysort::data::{self, MAX_CODES};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "keysort-bench")]
#[command(about = "Benchmarks the keysort bucket sort against the standard library sort")]
struct Cli {
    /// Number of records in the population
    #[arg(long, default_value_t = 10_000)]
    records: usize,

    /// Number of distinct two-letter codes the records draw from
    #[arg(long, default_value_t = 50)]
    codes: usize,

    /// Timed trials per phase
    #[arg(long, default_value_t = 100)]
    trials: u32,

    /// Untimed warm-up iterations before measurement
    #[arg(long, default_value_t = 100)]
    warmup: u32,

    /// Seed for a reproducible population; drawn from OS entropy if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(
        (1..=MAX_CODES).contains(&cli.codes),
        "--codes must be between 1 and {MAX_CODES}"
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let codes = data::generate_codes(cli.codes, &mut rng);
    let population = data::generate_records(&codes, cli.records, &mut rng);

    println!(
        "sorting {} records over {} distinct codes, {} trials per phase",
        cli.records, cli.codes, cli.trials
    );

    if cli.warmup > 0 {
        println!("warming up ({} iterations)", cli.warmup);
        bench::warmup(&population, cli.warmup);
    }

    println!("slice::sort_by_key baseline:");
    println!("{}", bench::measure_baseline(&population, cli.trials));

    println!("bucket sort engine:");
    let engine = bench::measure_engine(&population, cli.trials)
        .context("engine phase failed verification")?;
    println!("{engine}");

    Ok(())
}
