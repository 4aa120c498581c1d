use ndarray::{Array1, Array2};

use crate::basis::ReducedBasis;
use crate::error::ReductionError;

impl ReducedBasis {
    /// Project an n×m observation matrix (each column a sample in the
    /// original feature space) into the reduced space via `U @ observations`.
    ///
    /// A matrix with zero columns projects to a k×0 result, not an error.
    ///
    /// # Errors
    ///
    /// [`ReductionError::DimensionMismatch`] if the observations do not have
    /// `num_features()` rows; no partial projection is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::array;
    /// use varbasis::select_basis;
    ///
    /// let basis = select_basis(&array![[4.0, 0.0], [0.0, 1.0]], 0.5).unwrap();
    /// let reduced = basis.project(&array![[3.0], [5.0]]).unwrap();
    /// assert_eq!(reduced.dim(), (1, 1));
    /// assert!((reduced[[0, 0]].abs() - 3.0).abs() < 1e-9);
    /// ```
    pub fn project(&self, observations: &Array2<f64>) -> Result<Array2<f64>, ReductionError> {
        self.check_feature_dim(observations.nrows())?;
        Ok(self.projection_matrix().dot(observations))
    }

    /// Project a single length-n observation vector into length-k reduced
    /// coordinates.
    ///
    /// # Errors
    ///
    /// [`ReductionError::DimensionMismatch`] if the vector length is not
    /// `num_features()`.
    pub fn project_vector(
        &self,
        observation: &Array1<f64>,
    ) -> Result<Array1<f64>, ReductionError> {
        self.check_feature_dim(observation.len())?;
        Ok(self.projection_matrix().dot(observation))
    }

    /// Project several labeled observation groups with the same fixed basis,
    /// e.g. distinct labeled subsets of one dataset.
    ///
    /// Groups are independent: each is projected exactly as [`project`]
    /// would, no group's result depends on another's, and the output keeps
    /// the input order. Empty groups are allowed.
    ///
    /// # Errors
    ///
    /// [`ReductionError::DimensionMismatch`] if any group's feature
    /// dimension disagrees with the basis; nothing is returned for the
    /// remaining groups.
    ///
    /// [`project`]: ReducedBasis::project
    pub fn project_groups<'a>(
        &self,
        groups: &[(&'a str, &Array2<f64>)],
    ) -> Result<Vec<(&'a str, Array2<f64>)>, ReductionError> {
        groups
            .iter()
            .map(|&(label, observations)| Ok((label, self.project(observations)?)))
            .collect()
    }

    fn check_feature_dim(&self, actual: usize) -> Result<(), ReductionError> {
        let expected = self.num_features();
        if actual != expected {
            return Err(ReductionError::DimensionMismatch { expected, actual });
        }
        Ok(())
    }
}
