//! Common metrics for clustering
//!
//! A clustering algorithm has no notion of the ground-truth labels of a population, so its
//! cluster indices carry no inherent meaning. The metrics in this module count how the samples of
//! each true label spread over the cluster indices and resolve the correspondence afterwards by
//! majority vote.
use crate::dataset::Label;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix1};
use std::fmt;
use tracing::warn;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Confusion counts between true labels and assigned cluster indices
///
/// Row `i` belongs to the `i`-th label of [`labels`](ClusterTally::labels), column `j` counts the
/// samples of that label which were assigned to cluster `j`. Tallies over the same label set and
/// cluster count can be merged, for example to accumulate the held-out folds of a
/// cross-validation.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterTally<L> {
    labels: Vec<L>,
    counts: Array2<usize>,
}

impl<L: Label> ClusterTally<L> {
    /// Create an empty tally for the given labels and `n_clusters` cluster indices
    pub fn new(labels: Vec<L>, n_clusters: usize) -> Self {
        let counts = Array2::zeros((labels.len(), n_clusters));
        ClusterTally { labels, counts }
    }

    /// Build a tally from parallel arrays of true labels and cluster assignments
    ///
    /// The labels are collected in order of first appearance.
    pub fn from_assignments(
        ground_truth: &ArrayBase<impl Data<Elem = L>, Ix1>,
        assignments: &ArrayBase<impl Data<Elem = usize>, Ix1>,
        n_clusters: usize,
    ) -> Result<Self> {
        let mut labels: Vec<L> = Vec::new();
        for label in ground_truth.iter() {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }

        let mut tally = ClusterTally::new(labels, n_clusters);
        tally.record_all(ground_truth, assignments)?;
        Ok(tally)
    }

    /// The labels, one per row
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Count matrix with shape `(n_labels, n_clusters)`
    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    pub fn n_clusters(&self) -> usize {
        self.counts.ncols()
    }

    /// Per-cluster counts of a single label
    pub fn row(&self, label: &L) -> Option<ArrayView1<'_, usize>> {
        self.label_index(label).map(|idx| self.counts.row(idx))
    }

    /// Total number of recorded samples
    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    fn label_index(&self, label: &L) -> Option<usize> {
        self.labels.iter().position(|x| x == label)
    }

    /// Count one sample of `label` assigned to `cluster`
    pub fn record(&mut self, label: &L, cluster: usize) -> Result<()> {
        let row = self.label_index(label).ok_or_else(|| {
            Error::Parameters(format!("label {:?} is not part of the tally", label))
        })?;
        if cluster >= self.n_clusters() {
            return Err(Error::Parameters(format!(
                "cluster index {} out of range for {} clusters",
                cluster,
                self.n_clusters()
            )));
        }

        self.counts[(row, cluster)] += 1;
        Ok(())
    }

    /// Count every pair of true label and assigned cluster
    pub fn record_all(
        &mut self,
        ground_truth: &ArrayBase<impl Data<Elem = L>, Ix1>,
        assignments: &ArrayBase<impl Data<Elem = usize>, Ix1>,
    ) -> Result<()> {
        if ground_truth.len() != assignments.len() {
            return Err(Error::Parameters(format!(
                "{} labels but {} cluster assignments",
                ground_truth.len(),
                assignments.len()
            )));
        }

        ground_truth
            .iter()
            .zip(assignments.iter())
            .try_for_each(|(label, &cluster)| self.record(label, cluster))
    }

    /// Add the counts of `other` to this tally
    ///
    /// Both tallies must share labels (in the same order) and cluster count.
    pub fn merge(&mut self, other: &ClusterTally<L>) -> Result<()> {
        if self.labels != other.labels || self.counts.dim() != other.counts.dim() {
            return Err(Error::LabelMismatch);
        }

        self.counts += &other.counts;
        Ok(())
    }

    /// Resolve each label to its representative cluster and compute the accuracies
    ///
    /// The representative cluster of a label is the cluster holding most of its samples, ties go to
    /// the lowest cluster index. The accuracy of a label is the fraction of its samples inside the
    /// representative cluster (zero if no sample of that label was recorded) and the overall
    /// accuracy is the unweighted mean over labels.
    ///
    /// No one-to-one mapping is enforced: if two labels share a representative cluster the result
    /// is flagged as degenerate.
    pub fn accuracy(&self) -> ClusterAccuracy<L> {
        let (representatives, per_label): (Vec<usize>, Vec<f64>) = self
            .counts
            .axis_iter(Axis(0))
            .map(|row| {
                let (cluster, hits) = majority(&row);
                let total = row.sum();
                let accuracy = if total == 0 {
                    0.0
                } else {
                    hits as f64 / total as f64
                };
                (cluster, accuracy)
            })
            .unzip();

        let per_label = Array1::from(per_label);
        let overall = per_label.mean().unwrap_or(0.0);

        let result = ClusterAccuracy {
            labels: self.labels.clone(),
            representatives,
            per_label,
            overall,
        };

        for cluster in result.degenerate_clusters() {
            warn!(
                cluster,
                "several labels resolve to the same representative cluster"
            );
        }

        result
    }
}

/// Index and value of the first maximum
fn majority(row: &ArrayView1<usize>) -> (usize, usize) {
    let mut best = (0, 0);
    for (idx, &count) in row.iter().enumerate() {
        if count > best.1 {
            best = (idx, count);
        }
    }
    best
}

/// Print the tally, one row per label
impl<L: fmt::Debug> fmt::Display for ClusterTally<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.counts.ncols();
        writeln!(f, "{}", "-".repeat(len * 8 + 12))?;

        for (label, row) in self.labels.iter().zip(self.counts.rows()) {
            write!(f, "| {:>8?} |", label)?;
            for count in row {
                write!(f, " {:>5} |", count)?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", "-".repeat(len * 8 + 12))
    }
}

/// Majority-vote interpretation of a [`ClusterTally`]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterAccuracy<L> {
    labels: Vec<L>,
    representatives: Vec<usize>,
    per_label: Array1<f64>,
    overall: f64,
}

impl<L: Label> ClusterAccuracy<L> {
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Accuracy of every label, in the order of [`labels`](ClusterAccuracy::labels)
    pub fn per_label(&self) -> &Array1<f64> {
        &self.per_label
    }

    /// Accuracy of a single label
    pub fn label_accuracy(&self, label: &L) -> Option<f64> {
        self.labels
            .iter()
            .position(|x| x == label)
            .map(|idx| self.per_label[idx])
    }

    /// Unweighted mean of the per-label accuracies
    pub fn overall(&self) -> f64 {
        self.overall
    }

    /// Representative cluster of a single label
    pub fn representative(&self, label: &L) -> Option<usize> {
        self.labels
            .iter()
            .position(|x| x == label)
            .map(|idx| self.representatives[idx])
    }

    /// Label to representative cluster mapping
    pub fn mapping(&self) -> impl Iterator<Item = (&L, usize)> + '_ {
        self.labels
            .iter()
            .zip(self.representatives.iter().copied())
    }

    /// Clusters claimed by more than one label, in ascending order
    pub fn degenerate_clusters(&self) -> Vec<usize> {
        let mut clusters = self
            .representatives
            .iter()
            .enumerate()
            .filter(|&(idx, cluster)| self.representatives[..idx].contains(cluster))
            .map(|(_, &cluster)| cluster)
            .collect::<Vec<_>>();
        clusters.sort_unstable();
        clusters.dedup();
        clusters
    }

    /// Whether the clustering failed to separate at least two labels
    pub fn is_degenerate(&self) -> bool {
        !self.degenerate_clusters().is_empty()
    }

    /// Fails with `Error::DegenerateMapping` if two labels share a representative cluster
    pub fn ensure_separated(&self) -> Result<&Self> {
        match self.degenerate_clusters().first() {
            Some(&cluster) => Err(Error::DegenerateMapping {
                cluster,
                n_labels: self.representatives.iter().filter(|&&c| c == cluster).count(),
            }),
            None => Ok(self),
        }
    }
}
