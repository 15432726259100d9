//! Error types for operations with preconditions.
//!
//! Degenerate-but-defined inputs (empty set to `quantile`, single element to
//! `std_dev`) map to defined fallback values and stay infallible. Only the
//! operations that require a positive tail mass or a non-empty sample set
//! return `Result`.

use thiserror::Error;

/// Errors from tail-mass operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatError {
    /// Tail mass must be a fraction of the population in (0, 100].
    /// `alpha = 0` would divide by zero in the weight rescale step.
    #[error("alpha must be in (0, 100], got {0}")]
    InvalidAlpha(f64),

    /// The operation needs at least one sample to locate a pivot.
    #[error("operation requires a non-empty sample set")]
    EmptySample,
}
