//! Batch PCA over labeled CSV datasets.
//!
//! The pipeline is three steps, each a pure function over in-memory arrays:
//! [`load`] a comma-separated file (last field per line is the label),
//! [`fit`] a component basis by eigendecomposition of the feature covariance
//! matrix, and [`project`] samples onto that basis.

pub mod dataset;
pub mod error;
pub mod linalg;
pub mod pca;

pub use dataset::Dataset;
pub use error::{Error, ParseError, Result, ValidationError};
pub use pca::Pca;

use std::path::Path;

use ndarray::Array2;

/// Reads a labeled dataset from a CSV file. See [`dataset::load`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    dataset::load(path)
}

/// Fits `n_components` principal components to `dataset`. See [`Pca::fit`].
pub fn fit(dataset: &Dataset, n_components: usize) -> Result<Pca> {
    Pca::fit(dataset, n_components)
}

/// Projects `dataset` onto a fitted component basis. See [`Pca::project`].
pub fn project(dataset: &Dataset, components: &Pca) -> Result<Array2<f64>> {
    components.project(dataset)
}
