use super::{fold_indices, DatasetBase, DatasetView, Label, Records};
use crate::error::Result;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

/// Implementation without constraints on records and targets
///
/// This implementation block provides a method for the creation of datasets
/// from records and targets, as well as methods for accessing and replacing them.
impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    ///
    /// # Example
    ///
    /// ```ignore
    /// let dataset = Dataset::new(records, targets);
    /// ```
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Returns reference to targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Returns reference to records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Number of samples in the dataset
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Number of features of every sample
    pub fn nfeatures(&self) -> usize {
        self.records.nfeatures()
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// This allow the reader to understand its purpose while analysing results, for example
    /// correlation analysis or feature importance. Unnamed features are called `feature-{index}`.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.records.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }

    /// Updates the records of a dataset
    ///
    /// This function overwrites the records in a dataset. It also invalidates the feature names.
    pub fn with_records<T2: Records>(self, records: T2) -> DatasetBase<T2, T> {
        DatasetBase {
            records,
            targets: self.targets,
            feature_names: Vec::new(),
        }
    }

    /// Updates the targets of a dataset
    pub fn with_targets<T2>(self, targets: T2) -> DatasetBase<R, T2> {
        DatasetBase {
            records: self.records,
            targets,
            feature_names: self.feature_names,
        }
    }

    /// Sets the feature names
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> DatasetBase<R, T> {
        self.feature_names = names.into_iter().map(|x| x.into()).collect();
        self
    }
}

impl<F: Clone, L: Clone, D: Data<Elem = F>, S: Data<Elem = L>>
    DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
{
    /// Creates a view of a dataset
    pub fn view(&self) -> DatasetView<'_, F, L> {
        DatasetBase {
            records: self.records.view(),
            targets: self.targets.view(),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Copy the samples at `indices`, in the given order, into a new dataset
    pub fn select(&self, indices: &[usize]) -> DatasetBase<Array2<F>, Array1<L>> {
        DatasetBase {
            records: self.records.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Return a copy of the dataset with its samples in random order
    ///
    /// Records and targets are permuted together.
    pub fn shuffle<RNG: Rng>(&self, rng: &mut RNG) -> DatasetBase<Array2<F>, Array1<L>> {
        let mut indices = (0..self.nsamples()).collect::<Vec<_>>();
        indices.shuffle(rng);

        self.select(&indices)
    }

    /// Performs k-folding on the dataset
    ///
    /// The dataset is divided into `k` contiguous folds of (nearly) equal size, see
    /// [`fold_indices`](crate::dataset::fold_indices). For each fold a pair of training and
    /// validation datasets is returned, every sample appears in exactly one validation set.
    ///
    /// Fails with `Error::Parameters` if `k < 2` or `k` exceeds the number of samples.
    #[allow(clippy::type_complexity)]
    pub fn fold(
        &self,
        k: usize,
    ) -> Result<Vec<(DatasetBase<Array2<F>, Array1<L>>, DatasetBase<Array2<F>, Array1<L>>)>> {
        let folds = fold_indices(self.nsamples(), k)?;

        Ok(folds
            .into_iter()
            .map(|fold| (self.select(&fold.train), self.select(&fold.test_indices())))
            .collect())
    }
}

impl<F, L: Label, D: Data<Elem = F>, S: Data<Elem = L>>
    DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
{
    /// Distinct labels, in order of first appearance
    pub fn labels(&self) -> Vec<L> {
        let mut seen = HashSet::new();
        self.targets
            .iter()
            .filter(|label| seen.insert(*label))
            .cloned()
            .collect()
    }
}

impl<F, D: Data<Elem = F>> From<ArrayBase<D, Ix2>> for DatasetBase<ArrayBase<D, Ix2>, ()> {
    fn from(records: ArrayBase<D, Ix2>) -> Self {
        DatasetBase::new(records, ())
    }
}

impl<F, L, D: Data<Elem = F>, S: Data<Elem = L>> From<(ArrayBase<D, Ix2>, ArrayBase<S, Ix1>)>
    for DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
{
    fn from(rec_tar: (ArrayBase<D, Ix2>, ArrayBase<S, Ix1>)) -> Self {
        DatasetBase::new(rec_tar.0, rec_tar.1)
    }
}
