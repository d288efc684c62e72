//! NEON lane body (aarch64).

use std::arch::aarch64::*;

use super::LANES;

/// Append `a * wa + b * wb` for whole 4-lane chunks to `out`.
///
/// # Safety
/// NEON must be available. `a` and `b` must have equal length that is a
/// multiple of [`LANES`], and `out` must have spare capacity for all of it.
#[target_feature(enable = "neon")]
pub(super) unsafe fn weighted_add_lanes(a: &[f32], wa: f32, b: &[f32], wb: f32, out: &mut Vec<f32>) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len() % LANES, 0);
    debug_assert!(out.capacity() - out.len() >= a.len());

    let wa4 = vdupq_n_f32(wa);
    let wb4 = vdupq_n_f32(wb);
    let start = out.len();
    let dst = out.as_mut_ptr().add(start);
    for (i, (ca, cb)) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)).enumerate() {
        let va = vmulq_f32(vld1q_f32(ca.as_ptr()), wa4);
        let vb = vmulq_f32(vld1q_f32(cb.as_ptr()), wb4);
        vst1q_f32(dst.add(i * LANES), vaddq_f32(va, vb));
    }
    out.set_len(start + a.len());
}
