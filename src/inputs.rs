//! Random benchmark inputs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{ValueRange, VALUE_OFFSET};
use crate::error::{alloc_f32, KernelError, Result};

/// Seed derived from the wall clock, for runs that opt out of reproducibility.
pub fn seed_from_clock() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos() as u64).unwrap_or(0)
}

pub fn rng_from_seed(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// `len` values, each an integer drawn uniformly from `range` plus [`VALUE_OFFSET`].
pub fn generate_array<R: Rng + ?Sized>(rng: &mut R, len: i64, range: ValueRange) -> Result<Vec<f32>> {
    if len < 0 {
        return Err(KernelError::NegativeLength(len));
    }
    range.check()?;
    let len = len as usize;
    let dist = Uniform::new_inclusive(range.lo, range.hi);
    let mut out = alloc_f32(len)?;
    out.extend(dist.sample_iter(&mut *rng).take(len).map(|v| v as f32 + VALUE_OFFSET));
    Ok(out)
}
