//! `clustval-kmeans` clusters numeric records with the standard k-means algorithm and measures,
//! by k-fold cross-validation, how well the clusters separate known populations.
//!
//! ## The big picture
//!
//! `clustval-kmeans` is a crate of the `clustval` workspace. It depends on `clustval` for the
//! dataset, trait and metric definitions and is usually fed by `clustval-datasets`.
//!
//! ## Current state
//!
//! Right now `clustval-kmeans` provides:
//! * [K-Means](KMeans), a deterministic Lloyd's algorithm with a fixed iteration budget and
//!   nearest-centroid classification of new records;
//! * [K-Fold evaluation](KFold), which fits k-means on every training split and tallies the
//!   clusters of the held-out samples against their labels.
//!
//! Implementation choices, algorithmic details and tutorials can be found in the page dedicated
//! to the specific algorithms.
mod k_fold;
mod k_means;

pub use k_fold::*;
pub use k_means::*;
