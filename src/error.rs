use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Errors reported by basis selection, projection, and covariance estimation.
#[derive(Debug, Error)]
pub enum ReductionError {
    /// A caller-supplied parameter is outside its valid range, e.g. a
    /// retained-variance target not strictly between 0 and 1. Reported
    /// before any computation runs; never silently clamped.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Feature dimensions of two inputs disagree. No partial result is
    /// produced.
    #[error("dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The covariance matrix has zero total variance (all eigenvalues are
    /// zero after clamping numerical noise), so no fraction of it can be
    /// retained.
    #[error("degenerate input: covariance matrix has zero total variance")]
    DegenerateInput,

    /// The underlying LAPACK eigendecomposition failed.
    #[error("eigendecomposition failed: {0}")]
    Decomposition(#[from] LinalgError),
}
