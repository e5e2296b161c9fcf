use crate::k_means::errors::KMeansError;
use clustval::{error::Error, Float};
use ndarray::{s, Array2, ArrayView2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
/// Specifies centroid initialization algorithm for KMeans.
pub enum KMeansInit<F: Float> {
    /// The first `n_clusters` observations, in dataset order, become the initial centroids.
    /// Initialisation is fully deterministic.
    FirstK,
    /// Use a precomputed set of centroids, with shape `(n_clusters, n_features)`.
    Precomputed(Array2<F>),
}

impl<F: Float> Default for KMeansInit<F> {
    fn default() -> Self {
        KMeansInit::FirstK
    }
}

impl<F: Float> KMeansInit<F> {
    /// Runs the chosen initialization routine
    pub(crate) fn run(
        &self,
        n_clusters: usize,
        observations: ArrayView2<F>,
    ) -> Result<Array2<F>, KMeansError> {
        match self {
            Self::FirstK => Ok(observations.slice(s![..n_clusters, ..]).to_owned()),
            Self::Precomputed(centroids) => {
                if centroids.ncols() != observations.ncols() {
                    return Err(Error::DimensionMismatch {
                        expected: observations.ncols(),
                        found: centroids.ncols(),
                    }
                    .into());
                }
                Ok(centroids.clone())
            }
        }
    }
}
