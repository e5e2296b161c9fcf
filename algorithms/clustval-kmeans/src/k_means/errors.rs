use thiserror::Error;

/// An error when fitting with an invalid hyperparameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansParamsError {
    #[error("n_clusters cannot be 0")]
    NClusters,
    #[error("max_n_iterations cannot be 0")]
    MaxIterations,
    #[error("log_interval cannot be 0")]
    LogInterval,
    #[error("{found} precomputed centroids given for {expected} clusters")]
    PrecomputedCentroids { expected: usize, found: usize },
}

/// An error when modeling a KMeans algorithm
#[derive(Error, Debug, Clone)]
pub enum KMeansError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] KMeansParamsError),
    /// When the dataset holds fewer samples than clusters requested
    #[error("cannot find {n_clusters} clusters in {n_samples} samples")]
    TooManyClusters { n_clusters: usize, n_samples: usize },
    /// When a cluster receives no sample and the policy forbids keeping its previous centroid
    #[error("cluster {cluster} received no samples in iteration {iteration}")]
    EmptyCluster { cluster: usize, iteration: u64 },
    #[error(transparent)]
    ClustvalError(#[from] clustval::error::Error),
}
