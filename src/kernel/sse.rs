//! SSE lane body (x86_64).

use std::arch::x86_64::*;

use super::LANES;

/// Append `a * wa + b * wb` for whole 4-lane chunks to `out`.
///
/// # Safety
/// SSE must be available. `a` and `b` must have equal length that is a
/// multiple of [`LANES`], and `out` must have spare capacity for all of it.
#[target_feature(enable = "sse")]
pub(super) unsafe fn weighted_add_lanes(a: &[f32], wa: f32, b: &[f32], wb: f32, out: &mut Vec<f32>) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len() % LANES, 0);
    debug_assert!(out.capacity() - out.len() >= a.len());

    let wa4 = _mm_set1_ps(wa);
    let wb4 = _mm_set1_ps(wb);
    let start = out.len();
    let dst = out.as_mut_ptr().add(start);
    for (i, (ca, cb)) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)).enumerate() {
        let va = _mm_mul_ps(_mm_loadu_ps(ca.as_ptr()), wa4);
        let vb = _mm_mul_ps(_mm_loadu_ps(cb.as_ptr()), wb4);
        _mm_storeu_ps(dst.add(i * LANES), _mm_add_ps(va, vb));
    }
    out.set_len(start + a.len());
}
