use argh::FromArgs;
use lloyd::utils::cluster_sizes;
use lloyd::{Clustering, EmptyCluster, KMeans};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Cluster synthetic Gaussian blobs with k-means.
#[derive(FromArgs, Debug)]
struct Args {
    /// number of clusters, also the number of generated blobs
    #[argh(option, default = "5")]
    k: usize,
    /// max number of refinement iterations
    #[argh(option, default = "100")]
    max_iter: usize,
    /// number of points per blob
    #[argh(option, default = "200")]
    num: usize,
    /// dimension of the points
    #[argh(option, default = "2")]
    dim: usize,
    /// standard deviation of each blob
    #[argh(option, default = "1.0")]
    spread: f64,
    /// random seed for data generation and centroid placement
    #[argh(option)]
    seed: Option<u64>,
    /// squared centroid shift regarded as converged, 0 for exact comparison
    #[argh(option, default = "0.0")]
    tolerance: f64,
    /// keep the previous centroid of an empty cluster instead of failing
    #[argh(switch)]
    keep_empty: bool,
}

fn blobs(args: &Args, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let normal = Normal::new(0.0, args.spread).expect("spread must be finite and positive");
    let mut vecs = Vec::with_capacity(args.k * args.num);
    for _ in 0..args.k {
        let center: Vec<f64> = (0..args.dim)
            .map(|_| rng.random_range(-50.0..50.0))
            .collect();
        for _ in 0..args.num {
            vecs.push(center.iter().map(|c| c + normal.sample(rng)).collect());
        }
    }
    vecs
}

fn main() {
    let args: Args = argh::from_env();
    logforth::stderr().apply();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("args: {:?}, seed: {}", args, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let vecs = blobs(&args, &mut rng);

    let empty_cluster = match args.keep_empty {
        true => EmptyCluster::KeepPrevious,
        false => EmptyCluster::Fail,
    };
    let mut kmeans = KMeans::new(args.k, args.max_iter)
        .with_seed(seed)
        .with_tolerance(args.tolerance)
        .with_empty_cluster(empty_cluster);
    let (labels, centroids) = match kmeans.fit(&vecs) {
        Ok(res) => res,
        Err(err) => {
            log::error!("failed to cluster: {}", err);
            std::process::exit(1);
        }
    };

    for (i, (centroid, size)) in centroids
        .iter()
        .zip(cluster_sizes(&labels, args.k))
        .enumerate()
    {
        info!("cluster {}: {} points, centroid {:?}", i, size, centroid);
    }
    if let Some(inertia) = kmeans.inertia() {
        info!("inertia: {}", inertia);
    }
}
