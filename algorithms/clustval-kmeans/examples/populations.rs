use clustval::prelude::*;
use clustval_datasets::{balanced_populations, generate::blobs, load_population};
use clustval_kmeans::{KFold, KMeans};
use ndarray::array;
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing_subscriber::EnvFilter;

// Does k-means with two clusters tell two populations apart?
//
// Pass two `;` separated CSV files with a header line, for example the red and white wine quality
// data, or run without arguments to use synthetic populations. Set `RUST_LOG=debug` to follow
// the folds.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Our random number generator, seeded for reproducibility
    let mut rng = Xoshiro256Plus::seed_from_u64(42);

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (first, second) = match args.as_slice() {
        [first, second] => (
            load_population(first, true, b';')?,
            load_population(second, true, b';')?,
        ),
        _ => (
            blobs(1599, &array![[0., 0., 0.]], &mut rng),
            blobs(4898, &array![[4., 3., 5.]], &mut rng),
        ),
    };

    // Draw as many samples from the larger population as the smaller one holds, then mix them so
    // that every fold sees both
    let dataset = balanced_populations(&first, &second, &mut rng)?.shuffle(&mut rng);
    println!(
        "{} samples with {} features",
        dataset.nsamples(),
        dataset.nfeatures()
    );

    let tally = KFold::params(2).n_folds(10).fit(&dataset)?;
    println!("{}", tally);

    let accuracy = tally.accuracy();
    for (label, cluster) in accuracy.mapping() {
        println!(
            "population {} -> cluster {}: {:.2}%",
            label,
            cluster,
            100. * accuracy.label_accuracy(label).unwrap_or(0.)
        );
    }
    println!("overall accuracy: {:.2}%", 100. * accuracy.overall());
    if accuracy.is_degenerate() {
        println!(
            "clusters {:?} hold the majority of more than one population",
            accuracy.degenerate_clusters()
        );
    }

    // Fit once more on everything, these centroids are the ones worth plotting
    let model = KMeans::params(2).fit(&dataset)?;
    println!("centroids:\n{:.3}", model.centroids());

    Ok(())
}
