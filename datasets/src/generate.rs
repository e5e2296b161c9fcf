//! Synthetic populations
//!
//! Gaussian blobs around known centers are the best case for k-means: with enough distance
//! between the centers every blob should end up in its own cluster.

use clustval::Dataset;
use ndarray::{s, Array, Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

/// Generate `blob_size` samples around every row of `centers`, with unit variance
///
/// The blobs are stacked in the order of `centers`, the result has shape
/// `(n_centers * blob_size, n_features)`.
pub fn blobs(
    blob_size: usize,
    centers: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    blobs_with_distribution(blob_size, centers, StandardNormal, rng)
}

/// Generate `blob_size` samples around every row of `centers`
///
/// The offset of every sample from its center is drawn from `distribution`, independently for
/// every feature.
pub fn blobs_with_distribution(
    blob_size: usize,
    centers: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let (n_centers, n_features) = centers.dim();
    let mut records = Array2::zeros((n_centers * blob_size, n_features));

    for (idx, center) in centers.rows().into_iter().enumerate() {
        let samples = blob(blob_size, &center, distribution.clone(), rng);
        records
            .slice_mut(s![idx * blob_size..(idx + 1) * blob_size, ..])
            .assign(&samples);
    }

    records
}

/// Blobs labeled with the index of their center
///
/// Sample `i` belongs to blob `i / blob_size` and carries that index as label.
pub fn labeled_blobs(
    blob_size: usize,
    centers: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Dataset<f64, usize> {
    let records = blobs(blob_size, centers, rng);
    let targets = Array1::from_shape_fn(records.nrows(), |i| i / blob_size);

    Dataset::new(records, targets)
}

fn blob(
    blob_size: usize,
    center: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    distribution: impl Distribution<f64>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let shape = (blob_size, center.len());
    let offsets: Array2<f64> = Array::random_using(shape, distribution, rng);
    offsets + center
}
