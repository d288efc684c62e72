//! Wall-clock timing of the kernel variants.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::inputs::generate_array;
use crate::kernel::{self, KernelKind};

/// One timed kernel call.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub kind: KernelKind,
    pub len: usize,
    pub elapsed: Duration,
    /// Elapsed time in `Instant` ticks (nanoseconds).
    pub ticks: u64,
    /// Leading output values, when a preview was requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<f32>,
}

impl Measurement {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn time_line(&self) -> String {
        format!("{} time: {:.6}", self.kind.label(), self.seconds())
    }

    pub fn ticks_line(&self) -> String {
        format!("{} ticks: {}", self.kind.label(), self.ticks)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub len: usize,
    pub measurements: Vec<Measurement>,
}

/// Time a single call of `kind`. The output is handed back to the caller.
pub fn measure(kind: KernelKind, a: &[f32], wa: f32, b: &[f32], wb: f32) -> Result<(Vec<f32>, Measurement)> {
    let t0 = Instant::now();
    let out = kernel::weighted_add(kind, a, wa, b, wb)?;
    let elapsed = t0.elapsed();
    let m = Measurement {
        kind,
        len: out.len(),
        elapsed,
        ticks: elapsed.as_nanos().min(u64::MAX as u128) as u64,
        head: Vec::new(),
    };
    Ok((out, m))
}

/// Generate both inputs from `rng`, then time each configured variant in order.
pub fn run<R: Rng + ?Sized>(config: &BenchConfig, rng: &mut R) -> Result<BenchReport> {
    let a = generate_array(rng, config.len, config.range1)?;
    let b = generate_array(rng, config.len, config.range2)?;

    let mut measurements = Vec::with_capacity(config.kernels.len());
    for &kind in &config.kernels {
        let (out, mut m) = measure(kind, &a, config.wa, &b, config.wb)?;
        debug!("{}: {} elements in {:?}", kind, m.len, m.elapsed);
        if config.preview > 0 {
            m.head = out.iter().take(config.preview).copied().collect();
        }
        measurements.push(m);
    }
    Ok(BenchReport { len: a.len(), measurements })
}

/// First `n` values as two-decimal cells separated by two spaces.
pub fn format_preview(values: &[f32], n: usize) -> String {
    let mut s = String::new();
    for v in values.iter().take(n) {
        let _ = write!(s, "{:.2}  ", v);
    }
    s
}
