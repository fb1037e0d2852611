//! Dense helpers for the PCA fit: centering, covariance, and the sorted
//! symmetric eigendecomposition.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use nshare::{IntoNalgebra, IntoNdarray1, IntoNdarray2};

/// Splits a non-empty feature block into its per-column mean and the
/// mean-centered data.
pub fn center(x: ArrayView2<f64>) -> (Array1<f64>, Array2<f64>) {
    let mean = x.mean_axis(Axis(0)).expect("caller validates non-empty input");
    let centered = &x - &mean;
    (mean, centered)
}

/// Biased (divide-by-N) covariance of the columns of an already-centered
/// feature block.
pub fn covariance(centered: ArrayView2<f64>) -> Array2<f64> {
    let n = centered.nrows() as f64;
    centered.t().dot(&centered) / n
}

/// Eigenpairs of a real symmetric matrix, eigenvalues in descending order
/// with the matching eigenvectors as columns.
///
/// Equal eigenvalues keep the solver's original index order (the sort is
/// stable), so component selection stays deterministic under ties.
pub fn sorted_symmetric_eigen(matrix: Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let eigen = matrix.into_nalgebra().symmetric_eigen();
    let values = eigen.eigenvalues.into_ndarray1().into_owned();
    let vectors = eigen.eigenvectors.into_ndarray2().into_owned();

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let sorted_values = Array1::from_iter(order.iter().map(|&i| values[i]));
    let sorted_vectors = vectors.select(Axis(1), &order);
    (sorted_values, sorted_vectors)
}
