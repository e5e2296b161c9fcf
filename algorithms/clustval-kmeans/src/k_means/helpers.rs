//! Distance and centroid primitives
use clustval::{error::Error, Float};
use ndarray::{Array1, ArrayBase, Axis, Data, Ix1, Ix2};

/// Squared euclidean distance between two observations of the same length
pub fn sq_euclidean_distance<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix1>,
    b: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> F {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum()
}

/// Euclidean distance between two observations of the same length
pub fn euclidean_distance<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix1>,
    b: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> F {
    sq_euclidean_distance(a, b).sqrt()
}

/// Element-wise mean of the observations at `indices`
///
/// Returns `None` for an empty set of indices.
pub fn mean_of<F: Float>(
    // (n_observations, n_features)
    observations: &ArrayBase<impl Data<Elem = F>, Ix2>,
    indices: &[usize],
) -> Option<Array1<F>> {
    observations.select(Axis(0), indices).mean_axis(Axis(0))
}

/// Index of the centroid closest to `observation`
///
/// Ties are resolved in favour of the lowest centroid index. Fails if there are no centroids or
/// the observation length differs from the centroid length.
pub fn nearest_centroid<F: Float>(
    // (n_features)
    observation: &ArrayBase<impl Data<Elem = F>, Ix1>,
    // (n_centroids, n_features)
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Result<usize, Error> {
    if centroids.nrows() == 0 {
        return Err(Error::Parameters("no centroids to compare with".to_string()));
    }
    if observation.len() != centroids.ncols() {
        return Err(Error::DimensionMismatch {
            expected: centroids.ncols(),
            found: observation.len(),
        });
    }

    Ok(closest_centroid(centroids, observation).0)
}

/// Given a matrix of centroids with shape (n_centroids, n_features) and an observation,
/// return the index of the closest centroid (the index of the corresponding row in `centroids`)
/// and the squared distance to it.
pub(crate) fn closest_centroid<F: Float>(
    // (n_centroids, n_features)
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    // (n_features)
    observation: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> (usize, F) {
    let first_centroid = centroids.row(0);
    let (mut closest_index, mut minimum_distance) =
        (0, sq_euclidean_distance(&first_centroid, observation));

    for (centroid_index, centroid) in centroids.rows().into_iter().enumerate().skip(1) {
        let distance = sq_euclidean_distance(&centroid, observation);
        // strict comparison keeps the lowest index on ties
        if distance < minimum_distance {
            closest_index = centroid_index;
            minimum_distance = distance;
        }
    }
    (closest_index, minimum_distance)
}
