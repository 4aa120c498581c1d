use ndarray::Array2;

use crate::error::ReductionError;

/// Unbiased sample covariance of an n×m matrix whose columns are samples:
/// `(1 / (m - 1)) · X · Xᵀ`, an n×n symmetric matrix.
///
/// The input is used as given; callers wanting central moments must center
/// their samples first.
///
/// # Errors
///
/// [`ReductionError::InvalidConfiguration`] if there are fewer than two
/// samples (the unbiased divisor m−1 needs at least two).
pub fn sample_covariance(samples: &Array2<f64>) -> Result<Array2<f64>, ReductionError> {
    let num_samples = samples.ncols();
    if num_samples < 2 {
        return Err(ReductionError::InvalidConfiguration(format!(
            "covariance estimation needs at least 2 samples, got {num_samples}"
        )));
    }
    Ok(samples.dot(&samples.t()) / (num_samples as f64 - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn matches_hand_computed_two_feature_case() {
        // Two features, three samples (columns).
        let samples = array![[1.0, 2.0, 3.0], [0.0, 1.0, -1.0]];
        let covariance = sample_covariance(&samples).unwrap();

        assert_eq!(covariance.dim(), (2, 2));
        // X·Xᵀ = [[14, -1], [-1, 2]], divided by m-1 = 2.
        assert_abs_diff_eq!(covariance[[0, 0]], 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(covariance[[0, 1]], -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(covariance[[1, 0]], -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(covariance[[1, 1]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn output_is_symmetric() {
        let samples = array![
            [0.5, -1.0, 2.0, 0.0],
            [1.5, 0.25, -0.75, 2.0],
            [-2.0, 1.0, 0.5, 1.0]
        ];
        let covariance = sample_covariance(&samples).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(
                    covariance[[i, j]],
                    covariance[[j, i]],
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn fewer_than_two_samples_is_a_configuration_error() {
        let one_sample = array![[1.0], [2.0]];
        let err = sample_covariance(&one_sample).unwrap_err();
        assert!(matches!(err, ReductionError::InvalidConfiguration(_)));

        let no_samples = Array2::<f64>::zeros((2, 0));
        let err = sample_covariance(&no_samples).unwrap_err();
        assert!(matches!(err, ReductionError::InvalidConfiguration(_)));
    }
}
