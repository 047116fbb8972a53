use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lloyd::distance::{argmin, euclidean};
use lloyd::kmeans::{assign_all, update_centroids};
use lloyd::{Clustering, EmptyCluster, KMeans};
use rand::Rng;

fn random_vecs(num: usize, dim: usize) -> Vec<Vec<f32>> {
    let mut rng = rand::rng();
    (0..num)
        .map(|_| (0..dim).map(|_| rng.random::<f32>()).collect())
        .collect()
}

pub fn l2_distance_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();

    let mut group = c.benchmark_group("l2 distance");
    for dim in [64, 128, 512, 1024].into_iter() {
        let lhs: Vec<f32> = (0..dim).map(|_| rng.random::<f32>()).collect();
        let rhs: Vec<f32> = (0..dim).map(|_| rng.random::<f32>()).collect();

        group.bench_with_input(BenchmarkId::new("native", dim), &(&lhs, &rhs), |b, input| {
            b.iter(|| euclidean(input.0, input.1))
        });
    }
    group.finish();
}

pub fn argmin_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();

    let mut group = c.benchmark_group("argmin");
    for dim in [64, 128, 512, 1024].into_iter() {
        let x: Vec<f32> = (0..dim).map(|_| rng.random::<f32>()).collect();

        group.bench_with_input(BenchmarkId::new("native", dim), &x, |b, input| {
            b.iter(|| argmin(input))
        });
    }
    group.finish();
}

pub fn iteration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");
    for n_cluster in [4, 16, 64].into_iter() {
        let vecs = random_vecs(4096, 32);
        let centroids = vecs[..n_cluster].to_vec();

        group.bench_with_input(
            BenchmarkId::new("assign", n_cluster),
            &(&vecs, &centroids),
            |b, input| b.iter(|| assign_all(input.0, input.1)),
        );
        let labels = assign_all(&vecs, &centroids).unwrap();
        group.bench_with_input(
            BenchmarkId::new("update", n_cluster),
            &(&vecs, &labels, &centroids),
            |b, input| {
                b.iter(|| {
                    update_centroids(input.0, input.1, input.2, EmptyCluster::KeepPrevious)
                })
            },
        );
    }
    group.finish();
}

pub fn fit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    group.sample_size(10);
    for n_cluster in [8, 32].into_iter() {
        let vecs = random_vecs(4096, 16);
        group.bench_with_input(BenchmarkId::new("kmeans", n_cluster), &vecs, |b, input| {
            b.iter(|| {
                KMeans::new(n_cluster, 25)
                    .with_seed(0)
                    .with_empty_cluster(EmptyCluster::KeepPrevious)
                    .fit(input)
            })
        });
    }
    group.finish();
}

criterion_group!(l2_benches, l2_distance_benchmark);
criterion_group!(argmin_benches, argmin_benchmark);
criterion_group!(iteration_benches, iteration_benchmark);
criterion_group!(fit_benches, fit_benchmark);
criterion_main!(l2_benches, argmin_benches, iteration_benches, fit_benches);
