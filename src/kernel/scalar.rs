//! Scalar reference kernel.

use crate::error::{alloc_f32, Result};
use super::check_lengths;

#[inline(always)]
pub fn weighted_one(a: f32, wa: f32, b: f32, wb: f32) -> f32 {
    a * wa + b * wb
}

pub fn weighted_add(a: &[f32], wa: f32, b: &[f32], wb: f32) -> Result<Vec<f32>> {
    check_lengths(a, b)?;
    let mut out = alloc_f32(a.len())?;
    for (&x, &y) in a.iter().zip(b) {
        out.push(weighted_one(x, wa, y, wb));
    }
    Ok(out)
}
