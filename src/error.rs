use std::collections::TryReserveError;
use thiserror::Error;

/// Errors raised by the kernels and the input generator.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("input length mismatch: left has {left} elements, right has {right}")]
    InvalidLength { left: usize, right: usize },

    #[error("requested array length is negative: {0}")]
    NegativeLength(i64),

    #[error("empty value range {lo}..={hi}")]
    InvalidRange { lo: i32, hi: i32 },

    #[error("failed to allocate {len} f32 elements")]
    AllocationFailure {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

impl KernelError {
    /// True for both length errors (mismatched inputs, negative request).
    pub fn is_invalid_length(&self) -> bool {
        matches!(self, KernelError::InvalidLength { .. } | KernelError::NegativeLength(_))
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;

/// Allocate an empty buffer with room for exactly `len` elements.
pub(crate) fn alloc_f32(len: usize) -> Result<Vec<f32>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|source| KernelError::AllocationFailure { len, source })?;
    Ok(out)
}
