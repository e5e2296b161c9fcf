//! Error types in clustval
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("dimension mismatch: expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
    #[error("tallies were built over different label sets")]
    LabelMismatch,
    #[error("{n_labels} labels resolve to the same representative cluster {cluster}")]
    DegenerateMapping { cluster: usize, n_labels: usize },
    #[error("not enough samples")]
    NotEnoughSamples,
}
