//! Datasets
//!
//! This module implements the dataset struct, the numeric and label bounds used throughout the
//! crate and the k-fold partition of a sample population.
use ndarray::{ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2, OwnedRepr, ScalarOperand};

use num_traits::{AsPrimitive, FromPrimitive, NumAssignOps, NumCast, Signed};
use rand::distributions::uniform::SampleUniform;

use std::fmt;
use std::hash::Hash;
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, Range, SubAssign};

use crate::error::{Error, Result};

mod impl_dataset;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in the records of a dataset
/// and for every centroid computed from them.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + AsPrimitive<usize>
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + SampleUniform
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Discrete labels
///
/// Labels are countable, comparable and hashable. They name the ground-truth population of a
/// sample and are only ever consulted while evaluating a clustering, never while fitting one.
pub trait Label: PartialEq + Eq + Hash + Clone + fmt::Debug {}

impl Label for bool {}
impl Label for usize {}
impl Label for u8 {}
impl Label for String {}
impl Label for &str {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains a number of records about the data
/// and may contain targets and feature names. The dataset base is only generic over the records
/// and targets and introduces a trait bound on the records. `feature_names` are always owned and
/// copied when views are created.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with dimensionality (nsamples), or `()` for unlabeled data
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,

    feature_names: Vec<String>,
}

/// Dataset
///
/// The most commonly used typed of dataset. It contains a number of records stored as an `Array2`
/// and a single label per record stored as an `Array1`.
pub type Dataset<D, L> = DatasetBase<ArrayBase<OwnedRepr<D>, Ix2>, ArrayBase<OwnedRepr<L>, Ix1>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, D, L> = DatasetBase<ArrayView2<'a, D>, ArrayView1<'a, L>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

impl<F, S: Data<Elem = F>> Records for ArrayBase<S, Ix2> {
    type Elem = F;

    fn nsamples(&self) -> usize {
        self.nrows()
    }

    fn nfeatures(&self) -> usize {
        self.ncols()
    }
}

/// One train/test split of a k-fold partition
///
/// The held-out samples always form a contiguous range of the original ordering, the training
/// samples are every other index in ascending order.
#[derive(Clone, Debug, PartialEq)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Range<usize>,
}

impl Fold {
    /// Held-out indices, in ascending order
    pub fn test_indices(&self) -> Vec<usize> {
        self.test.clone().collect()
    }
}

/// Partition `n_samples` indices into `k` folds
///
/// Every index is held out exactly once. The folds differ in size by at most one sample: the first
/// `n_samples % k` folds hold out one extra sample.
///
/// Fails with `Error::Parameters` if `k < 2` or `k > n_samples`.
pub fn fold_indices(n_samples: usize, k: usize) -> Result<Vec<Fold>> {
    if k < 2 {
        return Err(Error::Parameters(format!(
            "at least two folds are required, got {}",
            k
        )));
    }
    if k > n_samples {
        return Err(Error::Parameters(format!(
            "cannot split {} samples into {} folds",
            n_samples, k
        )));
    }

    let base = n_samples / k;
    let remainder = n_samples % k;

    let mut start = 0;
    let folds = (0..k)
        .map(|i| {
            let size = if i < remainder { base + 1 } else { base };
            let test = start..start + size;
            start += size;

            let train = (0..test.start).chain(test.end..n_samples).collect();
            Fold { train, test }
        })
        .collect();

    Ok(folds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1, Array2};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn dataset_implements_required_methods() {
        let mut rng = SmallRng::seed_from_u64(42);

        let dataset = Dataset::new(array![[1., 2.], [3., 4.], [5., 6.]], array![0usize, 1, 1]);
        assert_eq!(dataset.nsamples(), 3);
        assert_eq!(dataset.nfeatures(), 2);
        assert_eq!(dataset.labels(), vec![0, 1]);

        // shuffling keeps every record paired with its label
        let shuffled = dataset.shuffle(&mut rng);
        for (record, label) in shuffled.records().rows().into_iter().zip(shuffled.targets()) {
            let expected = if record[0] < 2. { 0 } else { 1 };
            assert_eq!(*label, expected);
        }
        assert_abs_diff_eq!(shuffled.records().sum(), 21.);

        let view = dataset.view();
        assert_eq!(view.nsamples(), 3);

        let unlabeled = DatasetBase::from(array![[1., 2.], [3., 4.]]);
        assert_eq!(unlabeled.nsamples(), 2);

        let named = Dataset::new(array![[1., 2.]], array![true])
            .with_feature_names(vec!["alcohol", "density"]);
        assert_eq!(named.feature_names(), vec!["alcohol", "density"]);
    }

    #[test]
    fn feature_names_default_to_column_index() {
        let dataset = Dataset::new(array![[1., 2.]], array![0usize]);
        assert_eq!(dataset.feature_names(), vec!["feature-0", "feature-1"]);
    }

    #[test]
    fn labels_keep_first_appearance_order() {
        let dataset = Dataset::new(
            array![[1.], [2.], [3.], [4.]],
            array!["white", "red", "white", "red"],
        );
        assert_eq!(dataset.labels(), vec!["white", "red"]);
    }

    #[test]
    fn fold_indices_cover_every_sample_once() {
        for n_samples in 2..30 {
            for k in 2..=n_samples {
                let folds = fold_indices(n_samples, k).unwrap();
                assert_eq!(folds.len(), k);

                let mut seen = vec![0; n_samples];
                for fold in &folds {
                    for idx in fold.test.clone() {
                        seen[idx] += 1;
                        assert!(!fold.train.contains(&idx));
                    }
                    assert_eq!(fold.train.len() + fold.test.len(), n_samples);
                }
                assert!(seen.iter().all(|&x| x == 1));

                let sizes = folds.iter().map(|f| f.test.len()).collect::<Vec<_>>();
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn ten_samples_five_folds() {
        let folds = fold_indices(10, 5).unwrap();
        for (i, fold) in folds.iter().enumerate() {
            assert_eq!(fold.test_indices(), vec![2 * i, 2 * i + 1]);
            assert_eq!(fold.train.len(), 8);
        }
    }

    #[test]
    fn uneven_folds_front_load_the_remainder() {
        let sizes = fold_indices(7, 3)
            .unwrap()
            .into_iter()
            .map(|f| f.test.len())
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![3, 2, 2]);
    }

    #[test]
    fn fold_indices_reject_bad_k() {
        assert!(matches!(fold_indices(5, 1), Err(Error::Parameters(_))));
        assert!(matches!(fold_indices(5, 0), Err(Error::Parameters(_))));
        assert!(matches!(fold_indices(5, 6), Err(Error::Parameters(_))));
    }

    #[test]
    fn datasets_have_k_fold() {
        let linspace: Array1<f64> = Array1::linspace(0.0, 0.8, 100);
        let records = Array2::from_shape_vec((50, 2), linspace.to_vec()).unwrap();
        let targets: Array1<usize> = (0..50).collect();
        let dataset = Dataset::new(records, targets);

        for (train, val) in dataset.fold(2).unwrap() {
            assert_eq!(train.records().dim(), (25, 2));
            assert_eq!(val.records().dim(), (25, 2));
            assert_eq!(train.targets().dim(), 25);
            assert_eq!(val.targets().dim(), 25);
        }
        assert_eq!(dataset.fold(10).unwrap().len(), 10);

        let records =
            Array2::from_shape_vec((5, 2), vec![1., 1., 2., 2., 3., 3., 4., 4., 5., 5.]).unwrap();
        let targets = array![1usize, 2, 3, 4, 5];
        for (i, (train, val)) in Dataset::new(records, targets)
            .fold(5)
            .unwrap()
            .into_iter()
            .enumerate()
        {
            assert_eq!(val.records.row(0)[0] as usize, i + 1);
            assert_eq!(val.targets[0], i + 1);

            for j in 0..4 {
                assert!(train.records.row(j)[0] as usize != i + 1);
                assert!(train.targets[j] != i + 1);
            }
        }
    }
}
