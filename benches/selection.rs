use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::{Array, Array2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use varbasis::{sample_covariance, select_basis};

fn generate_covariance(n_features: usize) -> Array2<f64> {
    let samples = Array::random((n_features, 4 * n_features), Uniform::new(-1.0, 1.0));
    sample_covariance(&samples).unwrap()
}

fn bench_select_basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_basis");

    for &n_features in [16usize, 64, 128].iter() {
        let covariance = generate_covariance(n_features);
        group.throughput(Throughput::Elements((n_features * n_features) as u64));
        group.bench_with_input(
            BenchmarkId::new("target_0.95", n_features),
            &covariance,
            |b, covariance| b.iter(|| select_basis(covariance, 0.95).unwrap()),
        );
    }
    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");

    for &(n_features, n_samples) in [(64usize, 256usize), (128, 1024)].iter() {
        let covariance = generate_covariance(n_features);
        let basis = select_basis(&covariance, 0.95).unwrap();
        let observations = Array::random((n_features, n_samples), Uniform::new(-1.0, 1.0));
        group.throughput(Throughput::Elements((n_features * n_samples) as u64));
        group.bench_with_input(
            BenchmarkId::new("matrix", format!("{}x{}", n_features, n_samples)),
            &(basis, observations),
            |b, (basis, observations)| b.iter(|| basis.project(observations).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_select_basis, bench_project);
criterion_main!(benches);
