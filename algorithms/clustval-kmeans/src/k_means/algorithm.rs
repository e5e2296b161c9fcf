use crate::k_means::errors::KMeansError;
use crate::k_means::helpers::{closest_centroid, nearest_centroid};
use crate::k_means::{EmptyClusterPolicy, KMeansParams, KMeansValidParams};
use clustval::{error::Error, prelude::*, DatasetBase, Float};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, DataMut, Ix1, Ix2, Zip};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// K-means clustering aims to partition a set of unlabeled observations into clusters,
/// where each observation belongs to the cluster with the nearest mean.
///
/// The mean of the points within a cluster is called *centroid*.
///
/// Given the set of centroids, you can assign an observation to a cluster
/// choosing the nearest centroid.
///
/// ## The algorithm
///
/// We provide the _standard algorithm_ (also known as Lloyd's Algorithm) with a deterministic
/// initialisation, so that two fits on the same ordered data always agree.
///
/// There are three steps:
/// - initialisation step: the first `n_clusters` observations become the centroids, unless
///   precomputed centroids are supplied;
/// - assignment step: assign each observation to the nearest cluster
///                    (minimum euclidean distance between the observation and the cluster's
///                    centroid, the lowest cluster index wins on ties);
/// - update step: recompute the centroid of each cluster as the mean of its observations.
///
/// The initialisation step is a one-off, done at the very beginning.
/// Assignment and update are repeated exactly `max_n_iterations` times, there is no early exit on
/// convergence.
///
/// A cluster can end up without any observation, in which case its mean is undefined. What
/// happens then is decided by the [`EmptyClusterPolicy`]: by default the previous centroid is
/// kept.
///
/// ## Parallelisation
///
/// The assignment step does not require any coordination: the closest centroid for each point
/// can be computed independently from the closest centroid for any of the remaining points,
/// so it runs in parallel thanks to the `rayon` feature in `ndarray`. The update step is executed
/// on a single thread.
///
/// ## Tutorial
///
/// ```
/// use clustval::DatasetBase;
/// use clustval::traits::{Fit, Predict};
/// use clustval_kmeans::{KMeans, KMeansInit};
/// use ndarray::{array, Array1};
/// use approx::assert_abs_diff_eq;
///
/// let observations = DatasetBase::from(array![[0., 0.], [0., 1.], [10., 10.], [10., 11.]]);
///
/// let model = KMeans::params(2)
///     .init_method(KMeansInit::Precomputed(array![[0., 0.], [10., 10.]]))
///     .max_n_iterations(1)
///     .fit(&observations)
///     .expect("KMeans fitted");
///
/// assert_eq!(model.memberships(), &array![0, 0, 1, 1]);
/// assert_abs_diff_eq!(model.centroids(), &array![[0., 0.5], [10., 10.5]]);
///
/// // Once we found our set of centroids, we can also assign new points to the nearest cluster
/// let new_observation = array![[9., 20.5]];
/// let memberships: Array1<usize> = model.predict(&new_observation);
/// assert_eq!(memberships, array![1]);
/// ```
pub struct KMeans<F: Float> {
    centroids: Array2<F>,
    memberships: Array1<usize>,
    cluster_count: Array1<usize>,
    inertia: F,
    empty_cluster_events: usize,
}

impl<F: Float> KMeans<F> {
    pub fn params(nclusters: usize) -> KMeansParams<F> {
        KMeansParams::new(nclusters)
    }

    /// Return the set of centroids as a 2-dimensional matrix with shape
    /// `(n_centroids, n_features)`.
    pub fn centroids(&self) -> &Array2<F> {
        &self.centroids
    }

    /// Cluster index of every training observation, as assigned in the final iteration
    ///
    /// The assignment is made against the centroids *before* the final update step. Predicting
    /// the training observations against [`centroids`](KMeans::centroids) gives the same indices
    /// only once the fit has converged; after too few iterations the two can differ.
    pub fn memberships(&self) -> &Array1<usize> {
        &self.memberships
    }

    /// Training observation indices of every cluster, in dataset order
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut clusters = vec![Vec::new(); self.centroids.nrows()];
        for (idx, &cluster) in self.memberships.iter().enumerate() {
            clusters[cluster].push(idx);
        }
        clusters
    }

    /// Return the number of training points belonging to each cluster
    pub fn cluster_count(&self) -> &Array1<usize> {
        &self.cluster_count
    }

    /// Return the squared distance between each training point and the centroid it was assigned
    /// to in the final iteration, averaged across all training points.
    pub fn inertia(&self) -> F {
        self.inertia
    }

    /// How often a cluster was left empty and kept its previous centroid
    pub fn empty_cluster_events(&self) -> usize {
        self.empty_cluster_events
    }

    /// Index of the cluster closest to a single observation
    ///
    /// Unlike `predict` this checks the observation length against the centroids.
    pub fn classify(
        &self,
        observation: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<usize, KMeansError> {
        Ok(nearest_centroid(observation, &self.centroids)?)
    }
}

impl<F: Float, DA: Data<Elem = F>, T> Fit<ArrayBase<DA, Ix2>, T, KMeansError>
    for KMeansValidParams<F>
{
    type Object = KMeans<F>;

    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `fit` identifies `n_clusters` centroids based on the training data distribution.
    ///
    /// An instance of `KMeans` is returned.
    ///
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<DA, Ix2>, T>,
    ) -> Result<Self::Object, KMeansError> {
        let observations = dataset.records().view();
        let n_samples = dataset.nsamples();

        if n_samples == 0 {
            return Err(Error::NotEnoughSamples.into());
        }
        if self.n_clusters() > n_samples {
            return Err(KMeansError::TooManyClusters {
                n_clusters: self.n_clusters(),
                n_samples,
            });
        }

        let mut centroids = self.init_method().run(self.n_clusters(), observations)?;
        let mut memberships = Array1::zeros(n_samples);
        let mut dists = Array1::zeros(n_samples);
        let mut counts = Array1::zeros(self.n_clusters());
        let mut empty_cluster_events = 0;

        for n_iter in 0..self.max_n_iterations() {
            update_memberships_and_dists(&centroids, &observations, &mut memberships, &mut dists);
            let (new_centroids, new_counts) =
                compute_centroids(&centroids, &observations, &memberships);

            for (cluster, _) in new_counts.iter().enumerate().filter(|&(_, &c)| c == 0) {
                match self.empty_cluster() {
                    EmptyClusterPolicy::Fail => {
                        return Err(KMeansError::EmptyCluster {
                            cluster,
                            iteration: n_iter,
                        })
                    }
                    EmptyClusterPolicy::KeepPrevious => {
                        warn!(
                            cluster,
                            iteration = n_iter,
                            "cluster received no samples, keeping its previous centroid"
                        );
                        empty_cluster_events += 1;
                    }
                }
            }

            centroids = new_centroids;
            counts = new_counts;

            if let Some(interval) = self.log_interval() {
                if (n_iter + 1) % interval == 0 {
                    debug!(
                        iteration = n_iter + 1,
                        inertia = %(dists.sum() / F::cast(n_samples)),
                        "k-means iteration"
                    );
                }
            }
        }

        Ok(KMeans {
            centroids,
            memberships,
            cluster_count: counts,
            inertia: dists.sum() / F::cast(n_samples),
            empty_cluster_events,
        })
    }
}

impl<F: Float, DA: Data<Elem = F>> Transformer<&ArrayBase<DA, Ix2>, Array1<F>> for KMeans<F> {
    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `transform` returns, for each observation, its euclidean distance to its closest centroid.
    fn transform(&self, observations: &ArrayBase<DA, Ix2>) -> Array1<F> {
        let mut dists = Array1::zeros(observations.nrows());
        update_min_dists(&self.centroids, &observations.view(), &mut dists);
        dists.mapv_into(|d| d.sqrt())
    }
}

impl<F: Float, DA: Data<Elem = F>> PredictInplace<ArrayBase<DA, Ix2>, Array1<usize>>
    for KMeans<F>
{
    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `predict` returns, for each observation, the index of the closest cluster/centroid.
    ///
    /// You can retrieve the centroid associated to an index using the
    /// [`centroids` method](#method.centroids).
    fn predict_inplace(&self, observations: &ArrayBase<DA, Ix2>, memberships: &mut Array1<usize>) {
        assert_eq!(
            observations.nrows(),
            memberships.len(),
            "The number of data points must match the number of memberships."
        );
        assert_eq!(
            observations.ncols(),
            self.centroids.ncols(),
            "The number of features must match the centroids."
        );

        update_cluster_memberships(&self.centroids, &observations.view(), memberships);
    }

    fn default_target(&self, x: &ArrayBase<DA, Ix2>) -> Array1<usize> {
        Array1::zeros(x.nrows())
    }
}

impl<F: Float, DA: Data<Elem = F>> PredictInplace<ArrayBase<DA, Ix1>, usize> for KMeans<F> {
    /// Given one input observation, return the index of its closest cluster
    ///
    /// You can retrieve the centroid associated to an index using the
    /// [`centroids` method](#method.centroids).
    fn predict_inplace(&self, observation: &ArrayBase<DA, Ix1>, membership: &mut usize) {
        assert_eq!(
            observation.len(),
            self.centroids.ncols(),
            "The number of features must match the centroids."
        );

        *membership = closest_centroid(&self.centroids, observation).0;
    }

    fn default_target(&self, _x: &ArrayBase<DA, Ix1>) -> usize {
        0
    }
}

/// K-means is an iterative algorithm.
/// We will perform the assignment and update steps a fixed number of times.
///
/// `compute_centroids` returns a 2-dimensional array, where the i-th row corresponds to the
/// i-th cluster, together with the number of observations in each cluster. A cluster without
/// observations keeps its row of `old_centroids`.
pub(crate) fn compute_centroids<F: Float>(
    old_centroids: &Array2<F>,
    // (n_observations, n_features)
    observations: &ArrayBase<impl Data<Elem = F>, Ix2>,
    // (n_observations,)
    cluster_memberships: &ArrayBase<impl Data<Elem = usize>, Ix1>,
) -> (Array2<F>, Array1<usize>) {
    let n_clusters = old_centroids.nrows();
    let mut counts: Array1<usize> = Array1::zeros(n_clusters);
    let mut centroids = Array2::zeros((n_clusters, observations.ncols()));

    Zip::from(observations.rows())
        .and(cluster_memberships)
        .for_each(|observation, &cluster_membership| {
            let mut centroid = centroids.row_mut(cluster_membership);
            centroid += &observation;
            counts[cluster_membership] += 1;
        });

    Zip::from(centroids.rows_mut())
        .and(old_centroids.rows())
        .and(&counts)
        .for_each(|mut centroid, old_centroid, &cnt| {
            if cnt == 0 {
                centroid.assign(&old_centroid);
            } else {
                centroid /= F::cast(cnt);
            }
        });

    (centroids, counts)
}

// Update `cluster_memberships` with the index of the cluster each observation belongs to.
pub(crate) fn update_cluster_memberships<F: Float>(
    centroids: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    cluster_memberships: &mut ArrayBase<impl DataMut<Elem = usize>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(cluster_memberships)
        .par_for_each(|observation, cluster_membership| {
            *cluster_membership = closest_centroid(centroids, &observation).0
        });
}

// Updates `dists` with the squared distance of each observation from its closest centroid.
pub(crate) fn update_min_dists<F: Float>(
    centroids: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    dists: &mut ArrayBase<impl DataMut<Elem = F>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(dists)
        .par_for_each(|observation, dist| *dist = closest_centroid(centroids, &observation).1);
}

// Efficient combination of `update_cluster_memberships` and `update_min_dists`.
pub(crate) fn update_memberships_and_dists<F: Float>(
    centroids: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    cluster_memberships: &mut ArrayBase<impl DataMut<Elem = usize>, Ix1>,
    dists: &mut ArrayBase<impl DataMut<Elem = F>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(cluster_memberships)
        .and(dists)
        .par_for_each(|observation, cluster_membership, dist| {
            let (m, d) = closest_centroid(centroids, &observation);
            *cluster_membership = m;
            *dist = d;
        });
}

#[cfg(test)]
mod tests {
    use super::super::{mean_of, KMeansInit};
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, concatenate, Array, Array1, Array2, Axis};
    use ndarray_rand::rand::SeedableRng;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand_xoshiro::Xoshiro256Plus;

    macro_rules! calc_memberships {
        ($centroids:expr, $obs:expr) => {{
            let mut memberships = Array1::zeros($obs.nrows());
            update_cluster_memberships(&$centroids, &$obs, &mut memberships);
            memberships
        }};
    }

    fn two_blobs(rng: &mut Xoshiro256Plus) -> Array2<f64> {
        let blob_1: Array2<f64> = Array::random_using((50, 3), Uniform::new(-1., 1.), rng);
        let blob_2: Array2<f64> = Array::random_using((50, 3), Uniform::new(-1., 1.), rng) + 20.;
        concatenate(Axis(0), &[blob_1.view(), blob_2.view()]).unwrap()
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<KMeans<f64>>();
    }

    #[test]
    fn single_iteration_scenario() {
        let dataset = DatasetBase::from(array![[0., 0.], [0., 1.], [10., 10.], [10., 11.]]);
        let model = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(array![[0., 0.], [10., 10.]]))
            .max_n_iterations(1)
            .fit(&dataset)
            .unwrap();

        assert_eq!(model.clusters(), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(model.memberships(), &array![0, 0, 1, 1]);
        assert_eq!(model.cluster_count(), &array![2, 2]);
        assert_abs_diff_eq!(model.centroids(), &array![[0., 0.5], [10., 10.5]]);
        assert_abs_diff_eq!(model.inertia(), 0.5);
    }

    #[test]
    fn first_k_initialisation_is_used_by_default() {
        // with one iteration the assignment reflects the first two observations as centroids
        let dataset = DatasetBase::from(array![[0., 0.], [10., 10.], [0., 1.], [10., 11.]]);
        let model = KMeans::params(2)
            .max_n_iterations(1)
            .fit(&dataset)
            .unwrap();

        assert_eq!(model.memberships(), &array![0, 1, 0, 1]);
        assert_abs_diff_eq!(model.centroids(), &array![[0., 0.5], [10., 10.5]]);
    }

    #[test]
    fn fit_is_deterministic() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let dataset = DatasetBase::from(two_blobs(&mut rng));
        let params = KMeans::params(2).max_n_iterations(20);

        let first = params.fit(&dataset).unwrap();
        let second = params.fit(&dataset).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_observation_has_one_cluster() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let dataset = DatasetBase::from(two_blobs(&mut rng));
        let model = KMeans::params(3).fit(&dataset).unwrap();

        assert_eq!(model.memberships().len(), dataset.nsamples());
        assert!(model.memberships().iter().all(|&c| c < 3));

        let mut members = model.clusters().concat();
        members.sort_unstable();
        assert_eq!(members, (0..dataset.nsamples()).collect::<Vec<_>>());
        assert_eq!(model.cluster_count().sum(), dataset.nsamples());
    }

    #[test]
    fn centroids_are_means_of_their_clusters() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let records = two_blobs(&mut rng);
        let dataset = DatasetBase::from(records.clone());
        let model = KMeans::params(2).fit(&dataset).unwrap();

        for (cluster, members) in model.clusters().iter().enumerate() {
            let mean = mean_of(&records, members).unwrap();
            assert_abs_diff_eq!(model.centroids().row(cluster), mean, epsilon = 1e-10);
        }
    }

    #[test]
    fn classifier_reproduces_final_assignment() {
        let mut rng = Xoshiro256Plus::seed_from_u64(11);
        let records = two_blobs(&mut rng);
        let dataset = DatasetBase::from(records.clone());
        let model = KMeans::params(2).fit(&dataset).unwrap();

        for (observation, &membership) in records.rows().into_iter().zip(model.memberships()) {
            assert_eq!(model.classify(&observation).unwrap(), membership);
            let predicted: usize = model.predict(&observation);
            assert_eq!(predicted, membership);
        }

        let predicted = model.predict(dataset);
        assert_eq!(predicted.targets(), model.memberships());
    }

    #[test]
    fn memberships_lag_behind_an_unconverged_fit() {
        let records = array![[0., 0.], [1., 0.], [2., 0.], [3., 0.], [10., 0.]];
        let model = KMeans::params(2)
            .max_n_iterations(1)
            .fit(&DatasetBase::from(records.clone()))
            .unwrap();

        // assigned against the initial centroids (0, 0) and (1, 0)
        assert_eq!(model.memberships(), &array![0usize, 1, 1, 1, 1]);
        assert_abs_diff_eq!(model.centroids(), &array![[0., 0.], [4., 0.]]);

        // (2, 0) is equidistant to both updated centroids and goes to the lower index
        let predicted: Array1<usize> = model.predict(&records);
        assert_eq!(predicted, array![0usize, 0, 0, 1, 1]);
    }

    #[test]
    fn too_many_clusters() {
        let dataset = DatasetBase::from(array![[0., 0.], [1., 1.]]);
        let res = KMeans::params(3).fit(&dataset);
        assert!(matches!(
            res,
            Err(KMeansError::TooManyClusters {
                n_clusters: 3,
                n_samples: 2
            })
        ));

        let res = KMeans::params(0).fit(&dataset);
        assert!(matches!(res, Err(KMeansError::InvalidParams(_))));
    }

    #[test]
    fn empty_cluster_keeps_previous_centroid() {
        let dataset = DatasetBase::from(array![[0., 0.], [0., 1.], [1., 0.]]);
        let model = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(array![[0., 0.], [100., 100.]]))
            .max_n_iterations(3)
            .fit(&dataset)
            .unwrap();

        assert_eq!(model.memberships(), &array![0, 0, 0]);
        assert_eq!(model.cluster_count(), &array![3, 0]);
        assert_abs_diff_eq!(
            model.centroids(),
            &array![[1. / 3., 1. / 3.], [100., 100.]],
            epsilon = 1e-12
        );
        assert_eq!(model.empty_cluster_events(), 3);
    }

    #[test]
    fn empty_cluster_fails_on_request() {
        let dataset = DatasetBase::from(array![[0., 0.], [0., 1.], [1., 0.]]);
        let res = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(array![[0., 0.], [100., 100.]]))
            .empty_cluster(EmptyClusterPolicy::Fail)
            .fit(&dataset);

        assert!(matches!(
            res,
            Err(KMeansError::EmptyCluster {
                cluster: 1,
                iteration: 0
            })
        ));
    }

    #[test]
    fn precomputed_dimension_mismatch() {
        let dataset = DatasetBase::from(array![[0., 0.], [0., 1.]]);
        let res = KMeans::params(1)
            .init_method(KMeansInit::Precomputed(array![[0., 0., 0.]]))
            .fit(&dataset);
        assert!(matches!(
            res,
            Err(KMeansError::ClustvalError(Error::DimensionMismatch {
                expected: 2,
                found: 3
            }))
        ));
    }

    #[test]
    fn classify_checks_dimension() {
        let dataset = DatasetBase::from(array![[0., 0.], [0., 1.]]);
        let model = KMeans::params(1).fit(&dataset).unwrap();
        assert!(matches!(
            model.classify(&array![1.]),
            Err(KMeansError::ClustvalError(Error::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn log_interval_does_not_change_results() {
        let mut rng = Xoshiro256Plus::seed_from_u64(5);
        let dataset = DatasetBase::from(two_blobs(&mut rng));

        let quiet = KMeans::params(2).fit(&dataset).unwrap();
        let chatty = KMeans::params(2)
            .log_interval(Some(3))
            .fit(&dataset)
            .unwrap();
        assert_eq!(quiet, chatty);
    }

    #[test]
    fn transform_returns_distance_to_closest_centroid() {
        let dataset = DatasetBase::from(array![[0., 0.], [0., 2.]]);
        let model = KMeans::params(1).fit(&dataset).unwrap();

        assert_abs_diff_eq!(model.centroids(), &array![[0., 1.]]);
        let dists = model.transform(&array![[0., 1.], [3., 5.]]);
        assert_abs_diff_eq!(dists, array![0., 5.]);
    }

    #[test]
    fn compute_centroids_works() {
        let cluster_size = 100;
        let n_features = 4;

        // Let's setup a synthetic set of observations, composed of two clusters with known means
        let cluster_1: Array2<f64> =
            Array::random((cluster_size, n_features), Uniform::new(-100., 100.));
        let memberships_1 = Array1::zeros(cluster_size);
        let expected_centroid_1 = cluster_1.sum_axis(Axis(0)) / cluster_size as f64;

        let cluster_2: Array2<f64> =
            Array::random((cluster_size, n_features), Uniform::new(-100., 100.));
        let memberships_2 = Array1::ones(cluster_size);
        let expected_centroid_2 = cluster_2.sum_axis(Axis(0)) / cluster_size as f64;

        let observations = concatenate(Axis(0), &[cluster_1.view(), cluster_2.view()]).unwrap();
        let memberships =
            concatenate(Axis(0), &[memberships_1.view(), memberships_2.view()]).unwrap();

        let old_centroids = Array2::zeros((2, n_features));
        let (centroids, counts) = compute_centroids(&old_centroids, &observations, &memberships);
        assert_abs_diff_eq!(centroids.row(0), expected_centroid_1, epsilon = 1e-5);
        assert_abs_diff_eq!(centroids.row(1), expected_centroid_2, epsilon = 1e-5);
        assert_eq!(counts, array![cluster_size, cluster_size]);
    }

    #[test]
    fn compute_centroids_keeps_empty_clusters() {
        let observations = array![[1.0, 2.0]];
        let memberships = array![0];
        let old_centroids = Array2::ones((2, 2));
        let (centroids, counts) = compute_centroids(&old_centroids, &observations, &memberships);
        assert_abs_diff_eq!(centroids, array![[1.0, 2.0], [1.0, 1.0]]);
        assert_eq!(counts, array![1, 0]);
    }

    #[test]
    // An observation is closest to itself.
    fn nothing_is_closer_than_self() {
        let n_centroids = 20;
        let n_features = 5;
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let centroids: Array2<f64> = Array::random_using(
            (n_centroids, n_features),
            Uniform::new(-100., 100.),
            &mut rng,
        );

        let expected_memberships = (0..n_centroids).collect::<Array1<_>>();
        assert_eq!(calc_memberships!(centroids, centroids), expected_memberships);
    }

    #[test]
    fn test_min_dists() {
        let centroids = array![[0.0, 1.0], [40.0, 10.0]];
        let observations = array![[3.0, 4.0], [1.0, 3.0], [25.0, 15.0]];
        let mut dists = Array1::zeros(observations.nrows());

        update_min_dists(&centroids, &observations, &mut dists);
        assert_abs_diff_eq!(dists, array![18.0, 5.0, 250.0]);
    }
}
