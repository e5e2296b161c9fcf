use crate::k_fold::errors::KFoldError;
use crate::k_fold::{KFoldParams, KFoldValidParams};
use crate::{KMeans, KMeansInit};
use clustval::dataset::fold_indices;
use clustval::{error::Error, prelude::*, DatasetBase, Float};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use std::marker::PhantomData;
use tracing::debug;

/// K-fold evaluation of k-means clusters against known labels
///
/// The labeled population is split into `n_folds` contiguous folds. Every fold is held out
/// once: k-means is fitted on the remaining samples, the held-out samples are assigned to their
/// nearest centroid and the pairs of true label and assigned cluster are counted. The counts of
/// all folds are summed into a single [`ClusterTally`], whose
/// [`accuracy`](clustval::metrics::ClusterTally::accuracy) maps every label to the cluster index
/// holding most of its samples.
///
/// Labels are never looked at while fitting, only while counting.
///
/// Cluster indices are only meaningful within one fit. When every fold starts afresh, the same
/// population can end up behind index 0 in one fold and index 1 in the next, for example because
/// the first training samples of two folds come from different populations. The summed tally
/// then mixes both meanings and understates the agreement even for perfectly separable
/// populations. Warm starting keeps the indices of later folds aligned with the first fold.
///
/// ```
/// use clustval::prelude::*;
/// use clustval_kmeans::KFold;
/// use ndarray::array;
///
/// let records = array![
///     [0., 0.], [10., 10.], [0., 1.], [10., 11.], [1., 0.],
///     [11., 10.], [1., 1.], [11., 11.], [0.5, 0.5], [10.5, 10.5],
/// ];
/// let targets = array![0usize, 1, 0, 1, 0, 1, 0, 1, 0, 1];
/// let dataset = Dataset::new(records, targets);
///
/// let tally = KFold::params(2).n_folds(5).fit(&dataset).unwrap();
/// assert_eq!(tally.total(), 10);
///
/// let accuracy = tally.accuracy();
/// assert_eq!(accuracy.overall(), 1.0);
/// assert!(!accuracy.is_degenerate());
/// ```
///
/// ## Warm start
///
/// By default every fold starts from scratch with the first `n_clusters` training samples. With
/// [`warm_start`](KFoldParams::warm_start) the first fold starts that way and every later fold
/// starts from the centroids fitted on the previous fold, so later folds depend on earlier
/// ones and keep the cluster indices of the first fold.
#[derive(Clone, Debug, PartialEq)]
pub struct KFold<F: Float>(PhantomData<F>);

impl<F: Float> KFold<F> {
    /// Evaluate `n_clusters` clusters found with the default k-means parameters
    pub fn params(n_clusters: usize) -> KFoldParams<F> {
        KFoldParams::new(KMeans::params(n_clusters))
    }
}

impl<F: Float, L: Label, DA: Data<Elem = F>, DL: Data<Elem = L>>
    Fit<ArrayBase<DA, Ix2>, ArrayBase<DL, Ix1>, KFoldError> for KFoldValidParams<F>
{
    type Object = ClusterTally<L>;

    /// Evaluate the labeled `dataset` fold by fold
    ///
    /// Returns the confusion counts of all held-out samples, one row per label in order of first
    /// appearance and one column per cluster. Every sample is counted exactly once.
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<DA, Ix2>, ArrayBase<DL, Ix1>>,
    ) -> Result<Self::Object, KFoldError> {
        let n_samples = dataset.nsamples();
        if dataset.targets().len() != n_samples {
            return Err(Error::DimensionMismatch {
                expected: n_samples,
                found: dataset.targets().len(),
            }
            .into());
        }

        let folds = fold_indices(n_samples, self.n_folds())?;
        let labels = dataset.labels();
        let n_clusters = self.kmeans().n_clusters();

        let mut tally = ClusterTally::new(labels.clone(), n_clusters);
        let mut previous: Option<Array2<F>> = None;

        for (idx, fold) in folds.iter().enumerate() {
            let train = dataset.select(&fold.train);
            let test = dataset.select(&fold.test_indices());
            debug!(
                fold = idx,
                n_train = train.nsamples(),
                n_test = test.nsamples(),
                warm = previous.is_some(),
                "evaluating fold"
            );

            let params = match previous.take() {
                Some(centroids) => self
                    .kmeans()
                    .with_init(KMeansInit::Precomputed(centroids)),
                None => self.kmeans().clone(),
            };
            let model = params
                .fit(&train)
                .map_err(|source| KFoldError::Fold { fold: idx, source })?;

            let assignments: Array1<usize> = model.predict(test.records());
            let mut fold_tally = ClusterTally::new(labels.clone(), n_clusters);
            fold_tally.record_all(test.targets(), &assignments)?;
            tally.merge(&fold_tally)?;

            if self.warm_start() {
                previous = Some(model.centroids().clone());
            }
        }

        Ok(tally)
    }
}
