use crate::{KMeansError, KMeansParamsError};
use thiserror::Error;

/// An error when evaluating with an invalid hyperparameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KFoldParamsError {
    #[error("n_folds must be at least 2")]
    NFolds,
    #[error(transparent)]
    KMeans(#[from] KMeansParamsError),
}

/// An error when evaluating the agreement of k-means clusters with known labels
#[derive(Error, Debug, Clone)]
pub enum KFoldError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] KFoldParamsError),
    /// When fitting the clusters of a single fold failed
    #[error("Fitting fold {fold} failed: {source}")]
    Fold { fold: usize, source: KMeansError },
    #[error(transparent)]
    ClustvalError(#[from] clustval::error::Error),
}
