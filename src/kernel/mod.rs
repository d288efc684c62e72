//! Weighted array sum: `r[i] = a[i] * wa + b[i] * wb`.
//!
//! Two interchangeable variants share one contract. [`scalar`] walks the
//! inputs element by element and is the reference. [`vectorized`] handles
//! [`LANES`] elements per step and finishes the tail with the scalar routine.
//! Results agree within float rounding, not bit for bit.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{KernelError, Result};

pub mod scalar;
pub mod vectorized;

#[cfg(all(target_arch = "x86_64", feature = "simd-sse"))]
mod sse;

#[cfg(all(target_arch = "aarch64", feature = "simd-neon"))]
mod neon;

/// f32 elements per vector register.
pub const LANES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    Scalar,
    Vectorized,
}

impl KernelKind {
    pub const ALL: [KernelKind; 2] = [KernelKind::Scalar, KernelKind::Vectorized];

    /// Label used on report lines.
    pub fn label(self) -> &'static str {
        match self {
            KernelKind::Scalar => "Scalar",
            KernelKind::Vectorized => "Vectorized",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KernelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" => Ok(KernelKind::Scalar),
            "vectorized" | "simd" => Ok(KernelKind::Vectorized),
            other => Err(format!("unknown kernel '{}': use 'scalar' or 'vectorized'", other)),
        }
    }
}

/// Run the selected variant.
pub fn weighted_add(kind: KernelKind, a: &[f32], wa: f32, b: &[f32], wb: f32) -> Result<Vec<f32>> {
    match kind {
        KernelKind::Scalar => scalar::weighted_add(a, wa, b, wb),
        KernelKind::Vectorized => vectorized::weighted_add(a, wa, b, wb),
    }
}

#[inline]
pub(crate) fn check_lengths(a: &[f32], b: &[f32]) -> Result<()> {
    if a.len() != b.len() {
        return Err(KernelError::InvalidLength { left: a.len(), right: b.len() });
    }
    Ok(())
}
