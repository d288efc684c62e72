use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use wsum_bench::config::{BenchConfig, ValueRange};
use wsum_bench::inputs::{rng_from_seed, seed_from_clock};
use wsum_bench::harness::{self, format_preview};
use wsum_bench::kernel::{vectorized, KernelKind};

#[derive(Parser, Debug)]
#[command(name = "wsum-bench", version, about = "Time scalar vs vectorized weighted array sum (r = a*wa + b*wb)")]
struct Args {
    /// Elements per input array
    #[arg(long, allow_negative_numbers = true)]
    len: Option<i64>,

    /// Integer range for array 1, as LO:HI (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    range1: Option<ValueRange>,

    /// Integer range for array 2, as LO:HI (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    range2: Option<ValueRange>,

    /// Weight applied to array 1
    #[arg(long, allow_negative_numbers = true)]
    wa: Option<f32>,

    /// Weight applied to array 2
    #[arg(long, allow_negative_numbers = true)]
    wb: Option<f32>,

    /// RNG seed; omitted means seed from the wall clock
    #[arg(long)]
    seed: Option<u64>,

    /// Variant to time: 'scalar' or 'vectorized' (repeatable; default both)
    #[arg(long = "kernel")]
    kernels: Vec<KernelKind>,

    /// Also print elapsed time in clock ticks (ns)
    #[arg(long, default_value_t = false)]
    ticks: bool,

    /// Print the first N result values of each variant
    #[arg(long, default_value_t = 0)]
    preview: usize,

    /// Print the report as JSON instead of text lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn build_config(args: &Args) -> BenchConfig {
    let mut c = BenchConfig::default();
    if let Some(len) = args.len {
        c.len = len;
    }
    if let Some(r) = args.range1 {
        c.range1 = r;
    }
    if let Some(r) = args.range2 {
        c.range2 = r;
    }
    if let Some(w) = args.wa {
        c.wa = w;
    }
    if let Some(w) = args.wb {
        c.wb = w;
    }
    if !args.kernels.is_empty() {
        c.kernels = args.kernels.clone();
    }
    c.preview = args.preview;
    c
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = build_config(&args);

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    info!("seed={} len={} wa={} wb={}", seed, config.len, config.wa, config.wb);
    info!("vectorized backend: {}", vectorized::backend());

    let mut rng = rng_from_seed(seed);
    let report = harness::run(&config, &mut rng).context("benchmark run failed")?;

    if args.json {
        let payload = serde_json::json!({
            "seed": seed,
            "backend": vectorized::backend(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for m in &report.measurements {
        println!("{}", m.time_line());
        if args.ticks {
            println!("{}", m.ticks_line());
        }
        if !m.head.is_empty() {
            println!("{}", format_preview(&m.head, config.preview));
        }
    }
    Ok(())
}
