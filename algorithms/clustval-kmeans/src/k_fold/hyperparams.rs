use crate::{KFoldParamsError, KMeansParams, KMeansValidParams};
use clustval::prelude::*;
use clustval::Float;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the execution of
/// the [k-fold evaluation](crate::KFold).
pub struct KFoldValidParams<F: Float> {
    /// Number of folds the labeled population is split into.
    n_folds: usize,
    /// Seed every fold after the first with the centroids fitted on the previous fold.
    warm_start: bool,
    /// Hyperparameters of the k-means fit performed on every training split.
    kmeans: KMeansValidParams<F>,
}

#[derive(Clone, Debug, PartialEq)]
/// An helper struct used to construct a set of [valid hyperparameters](KFoldValidParams) for
/// the [k-fold evaluation](crate::KFold) (using the builder pattern).
pub struct KFoldParams<F: Float>(KFoldValidParams<F>);

impl<F: Float> KFoldParams<F> {
    /// Evaluate with `kmeans` on every training split.
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `n_folds = 10`
    /// * `warm_start = false`
    pub fn new(kmeans: KMeansParams<F>) -> Self {
        Self(KFoldValidParams {
            n_folds: 10,
            warm_start: false,
            kmeans: kmeans.inner().clone(),
        })
    }

    /// Change the value of `n_folds`
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.0.n_folds = n_folds;
        self
    }

    /// Reuse the centroids of the previous fold instead of initialising every fold afresh
    pub fn warm_start(mut self, warm_start: bool) -> Self {
        self.0.warm_start = warm_start;
        self
    }
}

impl<F: Float> ParamGuard for KFoldParams<F> {
    type Checked = KFoldValidParams<F>;
    type Error = KFoldParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.n_folds < 2 {
            return Err(KFoldParamsError::NFolds);
        }
        self.0.kmeans.validate()?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float> KFoldValidParams<F> {
    /// Number of folds the labeled population is split into.
    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    /// Whether later folds start from the centroids of the previous fold.
    pub fn warm_start(&self) -> bool {
        self.warm_start
    }

    /// Hyperparameters of every k-means fit.
    pub fn kmeans(&self) -> &KMeansValidParams<F> {
        &self.kmeans
    }
}
