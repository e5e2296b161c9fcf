use clustval::traits::Fit;
use clustval::DatasetBase;
use clustval_datasets::generate::{blobs, labeled_blobs};
use clustval_kmeans::{KFold, KMeans};
use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use ndarray::Array2;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand_xoshiro::Xoshiro256Plus;

fn k_means_bench(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(40);
    let cluster_sizes = vec![(100, 4), (400, 10), (3000, 10)];

    let mut benchmark = c.benchmark_group("k_means");
    benchmark.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    for (cluster_size, n_clusters) in cluster_sizes {
        let n_features = 3;
        let centers =
            Array2::random_using((n_clusters, n_features), Uniform::new(-30., 30.), &mut rng);
        let dataset = DatasetBase::from(blobs(cluster_size, &centers, &mut rng));
        benchmark.bench_function(BenchmarkId::new("k_means", cluster_size), |bencher| {
            bencher.iter(|| {
                KMeans::params(black_box(n_clusters))
                    .max_n_iterations(black_box(100))
                    .fit(&dataset)
                    .unwrap()
            });
        });
    }

    benchmark.finish();
}

fn k_fold_bench(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(41);
    let centers = Array2::random_using((2, 11), Uniform::new(-10., 10.), &mut rng);
    let dataset = labeled_blobs(1500, &centers, &mut rng).shuffle(&mut rng);

    let mut benchmark = c.benchmark_group("k_fold");
    for n_folds in [2, 10] {
        benchmark.bench_function(BenchmarkId::new("k_fold", n_folds), |bencher| {
            bencher.iter(|| {
                KFold::params(2)
                    .n_folds(black_box(n_folds))
                    .fit(&dataset)
                    .unwrap()
            });
        });
    }

    benchmark.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = k_means_bench, k_fold_bench
}
criterion_main!(benches);
