//! `clustval` clusters unlabeled numeric samples around a small number of centroids and measures
//! how well the discovered clusters line up with known population labels.
//!
//! ## The big picture
//!
//! The typical question answered with this workspace: given two populations of multi-attribute
//! numeric records, does unsupervised clustering recover the boundary between them?
//!
//! This crate holds the shared building blocks:
//! * [`DatasetBase`](dataset::DatasetBase) pairs records with their ground-truth labels and
//!   partitions them into [folds](dataset::fold_indices) for cross-validation;
//! * the [`Fit`](traits::Fit) and [`Predict`](traits::Predict) traits together with
//!   [`ParamGuard`] for validated hyperparameters;
//! * [`ClusterTally`](metrics::ClusterTally) and [`ClusterAccuracy`](metrics::ClusterAccuracy),
//!   which count label/cluster co-occurrences and resolve the unknown cluster-to-label
//!   correspondence by majority vote.
//!
//! The clustering engine itself lives in `clustval-kmeans`, data loading and class balancing in
//! `clustval-datasets`.
//!

pub mod dataset;
pub mod error;
mod metrics_clustering;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, DatasetView, Float, Label};
pub use param_guard::ParamGuard;

/// Metrics relating cluster assignments to ground-truth labels
pub mod metrics {
    pub use crate::metrics_clustering::{ClusterAccuracy, ClusterTally};
}
