//! 4-lane kernel with a scalar tail.
//!
//! The lane body runs on SSE (x86_64, `simd-sse`), NEON (aarch64,
//! `simd-neon`), or a portable `[f32; 4]` loop when neither is compiled in or
//! detected. The last `len % LANES` elements always go through
//! [`scalar::weighted_one`].

use serde::Serialize;
use std::fmt;

use crate::error::{alloc_f32, Result};
use super::{check_lengths, scalar, LANES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sse,
    Neon,
    Portable,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Backend::Sse => "sse",
            Backend::Neon => "neon",
            Backend::Portable => "portable",
        };
        f.write_str(s)
    }
}

/// Lane implementation used by [`weighted_add`] on this host.
pub fn backend() -> Backend {
    #[cfg(all(target_arch = "x86_64", feature = "simd-sse"))]
    {
        if std::arch::is_x86_feature_detected!("sse") {
            return Backend::Sse;
        }
    }
    #[cfg(all(target_arch = "aarch64", feature = "simd-neon"))]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return Backend::Neon;
        }
    }
    Backend::Portable
}

pub fn weighted_add(a: &[f32], wa: f32, b: &[f32], wb: f32) -> Result<Vec<f32>> {
    run(backend(), a, wa, b, wb)
}

/// Same contract as [`weighted_add`], pinned to the portable lane loop.
pub fn weighted_add_portable(a: &[f32], wa: f32, b: &[f32], wb: f32) -> Result<Vec<f32>> {
    run(Backend::Portable, a, wa, b, wb)
}

fn run(lanes: Backend, a: &[f32], wa: f32, b: &[f32], wb: f32) -> Result<Vec<f32>> {
    check_lengths(a, b)?;
    let n = a.len();
    let body = n - n % LANES;
    let mut out = alloc_f32(n)?;

    // `lanes` only ever names a backend that backend() detected, or Portable.
    match lanes {
        #[cfg(all(target_arch = "x86_64", feature = "simd-sse"))]
        Backend::Sse => unsafe { super::sse::weighted_add_lanes(&a[..body], wa, &b[..body], wb, &mut out) },
        #[cfg(all(target_arch = "aarch64", feature = "simd-neon"))]
        Backend::Neon => unsafe { super::neon::weighted_add_lanes(&a[..body], wa, &b[..body], wb, &mut out) },
        _ => portable_lanes(&a[..body], wa, &b[..body], wb, &mut out),
    }

    for (&x, &y) in a[body..].iter().zip(&b[body..]) {
        out.push(scalar::weighted_one(x, wa, y, wb));
    }
    Ok(out)
}

fn portable_lanes(a: &[f32], wa: f32, b: &[f32], wb: f32, out: &mut Vec<f32>) {
    let wa4 = [wa; LANES];
    let wb4 = [wb; LANES];
    for (ca, cb) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)) {
        let mut r = [0f32; LANES];
        for (l, slot) in r.iter_mut().enumerate() {
            *slot = ca[l] * wa4[l] + cb[l] * wb4[l];
        }
        out.extend_from_slice(&r);
    }
}
