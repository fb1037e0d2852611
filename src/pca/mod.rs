//! # Principal Component Analysis
//!
//! Covariance-based PCA for dense labeled datasets. Fitting centers the
//! feature block, eigendecomposes the biased covariance matrix with a
//! symmetric solver, and keeps the leading eigenvectors as the component
//! basis. Projection is the plain matrix product against that basis, with
//! no centering applied.

use log::debug;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

use crate::dataset::Dataset;
use crate::error::{Result, ValidationError};
use crate::linalg::{center, covariance, sorted_symmetric_eigen};

/// A fitted component basis.
///
/// `components` is n_features × n_components; each column is a unit-norm
/// eigenvector of the feature covariance matrix, columns ordered by
/// descending eigenvalue. The per-feature mean of the training data and the
/// retained eigenvalues are kept alongside the basis.
#[derive(Debug, Clone)]
pub struct Pca {
    mean: Array1<f64>,
    components: Array2<f64>,
    eigenvalues: Array1<f64>,
    explained_variance_ratio: Array1<f64>,
}

impl Pca {
    /// Fits a component basis to `dataset`, keeping `n_components` of them.
    ///
    /// `n_components` must not exceed the feature count; zero is valid and
    /// yields an empty basis. An empty dataset is a [`ValidationError`].
    pub fn fit(dataset: &Dataset, n_components: usize) -> Result<Self> {
        if dataset.is_empty() {
            return Err(ValidationError::EmptyDataset.into());
        }
        let n_features = dataset.n_features();
        if n_components > n_features {
            return Err(ValidationError::TooManyComponents {
                requested: n_components,
                n_features,
            }
            .into());
        }

        let (mean, centered) = center(dataset.features());
        let cov = covariance(centered.view());
        let (eigenvalues, eigenvectors) = sorted_symmetric_eigen(cov);

        let total_variance = eigenvalues.sum();
        let components = eigenvectors.slice(s![.., ..n_components]).to_owned();
        let retained = eigenvalues.slice(s![..n_components]).to_owned();
        let explained_variance_ratio = if total_variance > 0.0 {
            &retained / total_variance
        } else {
            Array1::zeros(n_components)
        };

        debug!(
            "fitted {} of {} components over {} samples",
            n_components,
            n_features,
            dataset.n_samples()
        );

        Ok(Pca {
            mean,
            components,
            eigenvalues: retained,
            explained_variance_ratio,
        })
    }

    /// Projects the dataset's raw feature block onto the component basis,
    /// returning an n_samples × n_components matrix.
    ///
    /// No centering happens here; callers wanting centered coordinates
    /// subtract [`Pca::mean`] themselves before projecting.
    pub fn project(&self, dataset: &Dataset) -> Result<Array2<f64>> {
        let n_features = dataset.n_features();
        let expected = self.components.nrows();
        if n_features != expected {
            return Err(ValidationError::DimensionMismatch {
                dataset: n_features,
                components: expected,
            }
            .into());
        }
        Ok(dataset.features().dot(&self.components))
    }

    /// Per-feature mean of the data the basis was fitted on.
    pub fn mean(&self) -> ArrayView1<f64> {
        self.mean.view()
    }

    /// The component basis, n_features × n_components, columns ordered by
    /// descending eigenvalue.
    pub fn components(&self) -> ArrayView2<f64> {
        self.components.view()
    }

    /// Eigenvalues of the retained components, descending.
    pub fn eigenvalues(&self) -> ArrayView1<f64> {
        self.eigenvalues.view()
    }

    /// Fraction of total variance carried by each retained component.
    pub fn explained_variance_ratio(&self) -> ArrayView1<f64> {
        self.explained_variance_ratio.view()
    }

    pub fn n_components(&self) -> usize {
        self.components.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1, Array2, Axis};

    fn collinear_dataset() -> Dataset {
        // Features [[1,1],[2,2],[3,3]], every label 1.
        Dataset::new(
            array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]],
            array![1.0, 1.0, 1.0],
        )
    }

    #[test]
    fn worked_example_component_and_eigenvalue() {
        let pca = Pca::fit(&collinear_dataset(), 1).unwrap();

        assert_eq!(pca.mean(), array![2.0, 2.0].view());
        assert_abs_diff_eq!(pca.eigenvalues()[0], 4.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pca.explained_variance_ratio()[0], 1.0, epsilon = 1e-9);

        // component is [1, 1] / sqrt(2) up to sign
        let c = pca.components();
        assert_abs_diff_eq!(c[[0, 0]].abs(), 1.0 / 2f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(c[[0, 0]], c[[1, 0]], epsilon = 1e-9);
    }

    #[test]
    fn projecting_centered_points_matches_hand_computation() {
        let data = collinear_dataset();
        let pca = Pca::fit(&data, 1).unwrap();

        let centered = &data.features() - &pca.mean();
        let centered = Dataset::new(centered, data.labels().to_owned());
        let projected = pca.project(&centered).unwrap();

        assert_eq!(projected.dim(), (3, 1));
        // ±[-sqrt(2), 0, sqrt(2)], sign follows the eigenvector's
        assert_abs_diff_eq!(projected[[0, 0]].abs(), 2f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(projected[[1, 0]], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projected[[2, 0]], -projected[[0, 0]], epsilon = 1e-9);
    }

    #[test]
    fn components_are_orthonormal() {
        let data = Dataset::new(
            array![
                [2.5, 2.4, 0.5],
                [0.5, 0.7, 1.9],
                [2.2, 2.9, 0.4],
                [1.9, 2.2, 1.1],
                [3.1, 3.0, 0.2],
                [2.3, 2.7, 0.8]
            ],
            array![0.0, 1.0, 0.0, 0.0, 1.0, 1.0],
        );
        let pca = Pca::fit(&data, 3).unwrap();
        let c = pca.components();

        for i in 0..3 {
            for j in 0..3 {
                let dot = c.column(i).dot(&c.column(j));
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(dot, expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn eigenvalues_are_nonnegative_and_nonincreasing() {
        let data = Dataset::new(
            array![
                [1.0, 0.3, 4.0],
                [2.0, 0.1, 2.5],
                [0.5, 0.9, 3.0],
                [1.5, 0.4, 1.0]
            ],
            array![0.0, 0.0, 1.0, 1.0],
        );
        let pca = Pca::fit(&data, 3).unwrap();
        let ev = pca.eigenvalues();

        for i in 0..ev.len() {
            assert!(ev[i] >= -1e-12, "eigenvalue {i} is negative: {}", ev[i]);
            if i > 0 {
                assert!(ev[i] <= ev[i - 1] + 1e-12);
            }
        }
    }

    #[test]
    fn full_basis_reconstructs_centered_data() {
        let data = Dataset::new(
            array![
                [2.5, 2.4, 0.5],
                [0.5, 0.7, 1.9],
                [2.2, 2.9, 0.4],
                [1.9, 2.2, 1.1],
                [3.1, 3.0, 0.2]
            ],
            Array1::zeros(5),
        );
        let pca = Pca::fit(&data, 3).unwrap();

        let centered = &data.features() - &pca.mean();
        let reduced = pca
            .project(&Dataset::new(centered.clone(), data.labels().to_owned()))
            .unwrap();
        let reconstructed = reduced.dot(&pca.components().t());

        for (a, b) in reconstructed.iter().zip(centered.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_components_is_an_empty_basis() {
        let data = collinear_dataset();
        let pca = Pca::fit(&data, 0).unwrap();

        assert_eq!(pca.n_components(), 0);
        assert_eq!(pca.components().dim(), (2, 0));

        let projected = pca.project(&data).unwrap();
        assert_eq!(projected.dim(), (3, 0));
    }

    #[test]
    fn too_many_components_is_rejected() {
        let err = Pca::fit(&collinear_dataset(), 3).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::TooManyComponents {
                requested: 3,
                n_features: 2
            })
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let data = Dataset::new(Array2::zeros((0, 0)), Array1::zeros(0));
        let err = Pca::fit(&data, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptyDataset)
        ));
    }

    #[test]
    fn projection_checks_feature_dimension() {
        let pca = Pca::fit(&collinear_dataset(), 1).unwrap();
        let wide = Dataset::new(array![[1.0, 2.0, 3.0]], array![0.0]);

        let err = pca.project(&wide).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DimensionMismatch {
                dataset: 3,
                components: 2
            })
        ));
    }

    #[test]
    fn fitted_mean_zeroes_the_training_block() {
        let data = Dataset::new(
            array![[4.0, -2.0], [6.0, 0.0], [8.0, 2.0]],
            array![0.0, 1.0, 2.0],
        );
        let pca = Pca::fit(&data, 2).unwrap();

        let centered = &data.features() - &pca.mean();
        for m in centered.mean_axis(Axis(0)).unwrap() {
            assert_abs_diff_eq!(m, 0.0, epsilon = 1e-12);
        }
    }
}
