mod algorithm;
mod errors;
mod helpers;
mod hyperparams;
mod init;

pub use algorithm::*;
pub use errors::*;
pub use helpers::{euclidean_distance, mean_of, nearest_centroid, sq_euclidean_distance};
pub use hyperparams::*;
pub use init::*;
