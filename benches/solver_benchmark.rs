use center_of_gravity_rs::{initialize, step, DemandPoint, SimulationRun, SolverConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn random_points(n: usize, seed: u64) -> Vec<DemandPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let x = rng.gen_range(0.0..100.0);
            let y = rng.gen_range(0.0..100.0);
            let w = rng.gen_range(1.0..1000.0);
            DemandPoint::new(i.to_string(), (x, y), w).unwrap()
        })
        .collect()
}

fn benchmark_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_points");
    group.sample_size(50);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for n_points in [4, 20, 1_000].iter() {
        group.throughput(Throughput::Elements(*n_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_points),
            n_points,
            |b, &n_points| {
                let points = random_points(n_points, 42);
                let start = initialize(&points).unwrap().centroid();

                b.iter(|| step(black_box(&start), black_box(&points), 1).unwrap());
            },
        );
    }
    group.finish();
}

fn benchmark_run_to_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_thresholds");
    group.sample_size(20);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let points = random_points(20, 7);

    for threshold in [0.1, 0.01, 0.001].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            threshold,
            |b, &threshold| {
                let config = SolverConfig::new(threshold).with_max_iters(1_000);

                b.iter(|| {
                    let mut run =
                        SimulationRun::new(black_box(points.clone()), config.clone()).unwrap();
                    run.run_to_convergence().unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_single_step, benchmark_run_to_convergence);
criterion_main!(benches);
