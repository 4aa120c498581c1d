use log::{debug, info};
use ndarray::{Array1, Array2};
use ndarray_linalg::{Eigh, UPLO};

use crate::error::ReductionError;

/// An ordered stack of covariance eigenvectors spanning the reduced subspace,
/// together with the retained-variance fraction it achieves.
///
/// Row `i` of the projection matrix is the `i`-th selected eigenvector;
/// rows are ordered by descending eigenvalue. Produced by [`select_basis`],
/// immutable afterwards.
///
/// Eigenvector sign is determined only up to a factor of ±1: two independent
/// runs, or two different LAPACK builds, may return some rows negated
/// relative to each other. Projections taken with one basis are internally
/// consistent; callers comparing coordinates across implementations must
/// normalize sign themselves.
#[derive(Debug, Clone)]
pub struct ReducedBasis {
    projection: Array2<f64>,
    eigenvalues: Array1<f64>,
    achieved_fraction: f64,
}

impl ReducedBasis {
    /// Number of selected eigenvectors (`k`, the reduced dimensionality).
    pub fn num_components(&self) -> usize {
        self.projection.nrows()
    }

    /// Dimensionality of the original feature space (`n`).
    pub fn num_features(&self) -> usize {
        self.projection.ncols()
    }

    /// Fraction of total variance retained by this basis.
    ///
    /// At least the target passed to [`select_basis`], except when all `n`
    /// eigenvectors were needed, where floating-point rounding may leave it
    /// marginally below a target very close to 1.
    pub fn achieved_fraction(&self) -> f64 {
        self.achieved_fraction
    }

    /// Eigenvalues of the selected eigenvectors, descending, with negative
    /// numerical noise clamped to zero.
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// The k×n projection matrix `U` (selected eigenvectors as rows).
    pub fn projection_matrix(&self) -> &Array2<f64> {
        &self.projection
    }
}

/// Select the smallest prefix of covariance eigenvectors, ranked by
/// descending eigenvalue, whose cumulative eigenvalue mass reaches `target`
/// as a fraction of the total.
///
/// Ties between equal eigenvalues are broken by ascending eigendecomposition
/// index, so the selection is deterministic for a given input. If rounding
/// leaves even the full basis short of a target very close to 1, the full
/// basis is returned with its achieved fraction rather than an error.
///
/// Pure function of its inputs; the selected component count and achieved
/// fraction are additionally reported through `log`.
///
/// * `covariance` - Symmetric positive-semidefinite n×n matrix. Symmetry is
///   assumed, not re-checked; tiny negative eigenvalues from numerical noise
///   are clamped to zero before any fraction is computed.
/// * `target` - Retained-variance target, strictly between 0 and 1.
///
/// # Errors
///
/// * [`ReductionError::InvalidConfiguration`] if `target` is not finite or
///   lies outside the open interval (0, 1).
/// * [`ReductionError::DimensionMismatch`] if `covariance` is not square.
/// * [`ReductionError::DegenerateInput`] if the total variance is zero.
/// * [`ReductionError::Decomposition`] if the eigendecomposition fails.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use varbasis::select_basis;
///
/// let covariance = array![[4.0, 0.0], [0.0, 1.0]];
/// let basis = select_basis(&covariance, 0.5).unwrap();
/// assert_eq!(basis.num_components(), 1);
/// assert!((basis.achieved_fraction() - 0.8).abs() < 1e-12);
/// ```
pub fn select_basis(
    covariance: &Array2<f64>,
    target: f64,
) -> Result<ReducedBasis, ReductionError> {
    if !target.is_finite() || target <= 0.0 || target >= 1.0 {
        return Err(ReductionError::InvalidConfiguration(format!(
            "retained-variance target must lie strictly between 0 and 1, got {target}"
        )));
    }
    let (rows, cols) = covariance.dim();
    if rows != cols {
        return Err(ReductionError::DimensionMismatch {
            expected: rows,
            actual: cols,
        });
    }

    let (raw_eigenvalues, eigenvectors) = covariance.eigh(UPLO::Lower)?;

    // A true covariance matrix is PSD; eigenvalues below zero are numerical
    // noise. Clamping keeps every cumulative fraction inside [0, 1].
    let clamped_count = raw_eigenvalues.iter().filter(|&&v| v < 0.0).count();
    if clamped_count > 0 {
        debug!("clamped {clamped_count} negative eigenvalues to zero");
    }
    let eigenvalues = raw_eigenvalues.mapv(|v| v.max(0.0));

    let total_variance = eigenvalues.sum();
    if total_variance <= 0.0 {
        return Err(ReductionError::DegenerateInput);
    }

    // Rank the indices once, descending by eigenvalue, ties by ascending
    // eigen-index.
    let n = eigenvalues.len();
    let mut ranked: Vec<usize> = (0..n).collect();
    ranked.sort_by(|&a, &b| {
        eigenvalues[b]
            .partial_cmp(&eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut cumulative_variance = 0.0;
    let mut achieved_fraction = 0.0;
    let mut selected: Vec<usize> = Vec::new();
    for &index in &ranked {
        cumulative_variance += eigenvalues[index];
        achieved_fraction = cumulative_variance / total_variance;
        selected.push(index);
        if achieved_fraction >= target {
            break;
        }
    }
    // Falling through the loop returns the full basis: rounding can leave
    // the cumulative fraction just below a target extremely close to 1.

    let mut projection = Array2::<f64>::zeros((selected.len(), n));
    let mut selected_eigenvalues = Array1::<f64>::zeros(selected.len());
    for (row, &index) in selected.iter().enumerate() {
        projection.row_mut(row).assign(&eigenvectors.column(index));
        selected_eigenvalues[row] = eigenvalues[index];
    }

    info!(
        "selected {} of {} eigenvectors, retaining {:.6} of total variance (target {})",
        selected.len(),
        n,
        achieved_fraction,
        target
    );

    Ok(ReducedBasis {
        projection,
        eigenvalues: selected_eigenvalues,
        achieved_fraction,
    })
}
