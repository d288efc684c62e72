// Weighted array-sum kernels and their benchmark harness
pub mod error;
pub mod config;
pub mod kernel;
pub mod inputs;
pub mod harness;

pub use error::KernelError;
pub use kernel::{weighted_add, KernelKind, LANES};
