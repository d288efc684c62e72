use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{KernelError, Result};
use crate::kernel::KernelKind;

pub const DEFAULT_LEN: i64 = 10_000_000;
pub const DEFAULT_RANGE1: ValueRange = ValueRange { lo: 1, hi: 10 };
pub const DEFAULT_RANGE2: ValueRange = ValueRange { lo: 5, hi: 30 };
pub const DEFAULT_WA: f32 = 0.3;
pub const DEFAULT_WB: f32 = 0.52;

/// Added to every generated integer so values sit at `k + 0.5`.
pub const VALUE_OFFSET: f32 = 0.5;

/// Inclusive integer range `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    pub lo: i32,
    pub hi: i32,
}

impl ValueRange {
    pub fn new(lo: i32, hi: i32) -> Result<Self> {
        let r = Self { lo, hi };
        r.check()?;
        Ok(r)
    }

    pub fn check(&self) -> Result<()> {
        if self.lo > self.hi {
            return Err(KernelError::InvalidRange { lo: self.lo, hi: self.hi });
        }
        Ok(())
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lo, self.hi)
    }
}

impl FromStr for ValueRange {
    type Err = String;

    /// Parses `"LO:HI"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (lo, hi) = s.split_once(':').ok_or_else(|| format!("expected LO:HI, got '{}'", s))?;
        let lo: i32 = lo.trim().parse().map_err(|e| format!("bad range start '{}': {}", lo, e))?;
        let hi: i32 = hi.trim().parse().map_err(|e| format!("bad range end '{}': {}", hi, e))?;
        ValueRange::new(lo, hi).map_err(|e| e.to_string())
    }
}

/// Resolved configuration for one harness run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Requested element count; negative values are rejected by the generator.
    pub len: i64,
    pub range1: ValueRange,
    pub range2: ValueRange,
    pub wa: f32,
    pub wb: f32,
    /// Variants to time, in order.
    pub kernels: Vec<KernelKind>,
    /// Leading output values kept per measurement for display (0 = none).
    pub preview: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            range1: DEFAULT_RANGE1,
            range2: DEFAULT_RANGE2,
            wa: DEFAULT_WA,
            wb: DEFAULT_WB,
            kernels: KernelKind::ALL.to_vec(),
            preview: 0,
        }
    }
}
