use crate::KMeansParamsError;

use super::init::KMeansInit;
use clustval::prelude::*;
use clustval::Float;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What to do with a cluster that received no observation during an iteration.
///
/// The mean of an empty set is undefined, so the centroid of such a cluster cannot be
/// recomputed.
pub enum EmptyClusterPolicy {
    /// Keep the centroid of the previous iteration and continue. Every occurrence is logged and
    /// counted in [`KMeans::empty_cluster_events`](crate::KMeans::empty_cluster_events).
    KeepPrevious,
    /// Abort the fit with [`KMeansError::EmptyCluster`](crate::KMeansError::EmptyCluster).
    Fail,
}

impl Default for EmptyClusterPolicy {
    fn default() -> Self {
        EmptyClusterPolicy::KeepPrevious
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the execution of
/// the [K-means algorithm](crate::KMeans).
pub struct KMeansValidParams<F: Float> {
    /// The number of clusters we will be looking for in the training dataset.
    n_clusters: usize,
    /// The training loop runs exactly `max_n_iterations` assignment and update steps, there is
    /// no early exit on convergence.
    max_n_iterations: u64,
    /// The initialization strategy used to initialize the centroids.
    init: KMeansInit<F>,
    /// Handling of clusters left without observations.
    empty_cluster: EmptyClusterPolicy,
    /// Emit a progress event every `log_interval` iterations.
    log_interval: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
/// An helper struct used to construct a set of [valid hyperparameters](KMeansValidParams) for
/// the [K-means algorithm](crate::KMeans) (using the builder pattern).
pub struct KMeansParams<F: Float>(KMeansValidParams<F>);

impl<F: Float> KMeansParams<F> {
    /// `new` lets us configure our training algorithm parameters:
    /// * we will be looking for `n_clusters` in the training dataset;
    /// * we run exactly `max_n_iterations` training iterations.
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `max_n_iterations = 100`
    /// * `init = FirstK`
    /// * `empty_cluster = KeepPrevious`
    /// * `log_interval = None`
    pub fn new(n_clusters: usize) -> Self {
        Self(KMeansValidParams {
            n_clusters,
            max_n_iterations: 100,
            init: KMeansInit::FirstK,
            empty_cluster: EmptyClusterPolicy::KeepPrevious,
            log_interval: None,
        })
    }

    /// Change the value of `max_n_iterations`
    pub fn max_n_iterations(mut self, max_n_iterations: u64) -> Self {
        self.0.max_n_iterations = max_n_iterations;
        self
    }

    /// Change the value of `init`
    pub fn init_method(mut self, init: KMeansInit<F>) -> Self {
        self.0.init = init;
        self
    }

    /// Change the empty cluster policy
    pub fn empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.0.empty_cluster = policy;
        self
    }

    /// Log the mean squared distance every `log_interval` iterations, `None` disables it
    pub fn log_interval(mut self, log_interval: Option<u64>) -> Self {
        self.0.log_interval = log_interval;
        self
    }

    pub(crate) fn inner(&self) -> &KMeansValidParams<F> {
        &self.0
    }
}

/// Two clusters, as needed to split two populations.
impl<F: Float> Default for KMeansParams<F> {
    fn default() -> Self {
        KMeansParams::new(2)
    }
}

impl<F: Float> ParamGuard for KMeansParams<F> {
    type Checked = KMeansValidParams<F>;
    type Error = KMeansParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        self.0.validate()?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float> KMeansValidParams<F> {
    pub(crate) fn validate(&self) -> Result<(), KMeansParamsError> {
        if self.n_clusters == 0 {
            return Err(KMeansParamsError::NClusters);
        }
        if self.max_n_iterations == 0 {
            return Err(KMeansParamsError::MaxIterations);
        }
        if self.log_interval == Some(0) {
            return Err(KMeansParamsError::LogInterval);
        }
        if let KMeansInit::Precomputed(centroids) = &self.init {
            if centroids.nrows() != self.n_clusters {
                return Err(KMeansParamsError::PrecomputedCentroids {
                    expected: self.n_clusters,
                    found: centroids.nrows(),
                });
            }
        }
        Ok(())
    }

    /// Copy of these parameters seeded with the given centroids
    pub(crate) fn with_init(&self, init: KMeansInit<F>) -> Self {
        KMeansValidParams {
            init,
            ..self.clone()
        }
    }

    /// The number of clusters we will be looking for in the training dataset.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Number of assignment and update steps of every fit.
    pub fn max_n_iterations(&self) -> u64 {
        self.max_n_iterations
    }

    /// Cluster initialization strategy
    pub fn init_method(&self) -> &KMeansInit<F> {
        &self.init
    }

    pub fn empty_cluster(&self) -> EmptyClusterPolicy {
        self.empty_cluster
    }

    pub fn log_interval(&self) -> Option<u64> {
        self.log_interval
    }
}
