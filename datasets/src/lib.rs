//! `clustval-datasets` loads the labeled populations evaluated by `clustval-kmeans`.
//!
//! ## The Big Picture
//!
//! An evaluation starts from two populations of numeric records, for example the chemical
//! analyses of red and white wines, stored as (optionally gzipped) CSV files. This crate
//!
//! * reads such files into `Array2<f64>` records,
//! * balances the populations by drawing a random subset of the larger one,
//! * labels and concatenates them into a single [`clustval::Dataset`],
//! * and [generates](generate) synthetic populations for tests and benchmarks.
//!
//! ## Loading two populations
//!
//! ```ignore
//! let red = clustval_datasets::load_population("winequality-red.csv", true, b';')?;
//! let white = clustval_datasets::load_population("winequality-white.csv", true, b';')?;
//!
//! // label 0 for red, 1 for white, both of the same size
//! let dataset = clustval_datasets::balanced_populations(&red, &white, &mut rng)?;
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use clustval::Dataset;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use ndarray::{concatenate, Array1, Array2, ArrayBase, Axis, Data, Ix2};
use ndarray_csv::{Array2Reader, ReadError};
use ndarray_rand::rand::{seq::index, Rng};
use thiserror::Error;
use tracing::debug;

pub mod generate;

pub type Result<T> = std::result::Result<T, DatasetError>;

/// An error when loading or assembling populations
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("could not open population: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] ReadError),
    /// Both populations must describe their samples with the same features
    #[error("populations have {first} and {second} features")]
    FeatureMismatch { first: usize, second: usize },
    #[error("cannot draw {requested} samples from a population of {available}")]
    NotEnoughSamples { requested: usize, available: usize },
    #[error(transparent)]
    NdShape(#[from] ndarray::ShapeError),
}

/// Convert Gzipped CSV bytes into 2D array
pub fn array_from_gz_csv<R: Read>(gz: R, has_headers: bool, separator: u8) -> Result<Array2<f64>> {
    // unzip file
    let file = GzDecoder::new(gz);
    array_from_csv(file, has_headers, separator)
}

/// Convert CSV bytes into 2D array
///
/// Every row becomes a sample, every column a feature. All rows must have the same length.
pub fn array_from_csv<R: Read>(csv: R, has_headers: bool, separator: u8) -> Result<Array2<f64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .from_reader(csv);

    Ok(reader.deserialize_array2_dynamic()?)
}

/// Read a population from a CSV file
///
/// Files ending in `.gz` are decompressed on the fly.
pub fn load_population<P: AsRef<Path>>(
    path: P,
    has_headers: bool,
    separator: u8,
) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let records = if path.extension().map_or(false, |ext| ext == "gz") {
        array_from_gz_csv(file, has_headers, separator)?
    } else {
        array_from_csv(file, has_headers, separator)?
    };

    debug!(
        path = %path.display(),
        n_samples = records.nrows(),
        n_features = records.ncols(),
        "loaded population"
    );

    Ok(records)
}

/// Draw `n_samples` distinct samples of `records` uniformly at random
///
/// The drawn samples keep their relative order. Fails if the population holds fewer than
/// `n_samples` samples.
pub fn undersample(
    records: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    n_samples: usize,
    rng: &mut impl Rng,
) -> Result<Array2<f64>> {
    if n_samples > records.nrows() {
        return Err(DatasetError::NotEnoughSamples {
            requested: n_samples,
            available: records.nrows(),
        });
    }

    let mut indices = index::sample(rng, records.nrows(), n_samples).into_vec();
    indices.sort_unstable();

    Ok(records.select(Axis(0), &indices))
}

/// Stack two populations into a labeled dataset
///
/// The samples of `first` come first and carry label `0`, the samples of `second` follow with
/// label `1`.
pub fn two_populations(
    first: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    second: &ArrayBase<impl Data<Elem = f64>, Ix2>,
) -> Result<Dataset<f64, usize>> {
    if first.ncols() != second.ncols() {
        return Err(DatasetError::FeatureMismatch {
            first: first.ncols(),
            second: second.ncols(),
        });
    }

    let records = concatenate(Axis(0), &[first.view(), second.view()])?;
    let targets = Array1::from_shape_fn(records.nrows(), |i| usize::from(i >= first.nrows()));

    Ok(Dataset::new(records, targets))
}

/// Like [`two_populations`], after shrinking the larger population to the size of the smaller
///
/// The larger population is [undersampled](undersample), the smaller one is used as is.
pub fn balanced_populations(
    first: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    second: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Result<Dataset<f64, usize>> {
    let n_samples = first.nrows().min(second.nrows());
    debug!(
        first = first.nrows(),
        second = second.nrows(),
        n_samples,
        "balancing populations"
    );

    let first = undersample(first, n_samples, rng)?;
    let second = undersample(second, n_samples, rng)?;

    two_populations(&first, &second)
}
