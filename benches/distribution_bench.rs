use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probdist::prelude::*;
use rand::prelude::*;

/// Evaluation points spread over `[lo, hi]`
fn generate_points(size: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(lo..hi)).collect()
}

const CASES: &[(&str, &[f64], (f64, f64))] = &[
    ("normal", &[0.0, 1.0], (-5.0, 5.0)),
    ("gamma", &[2.5, 1.5], (0.0, 20.0)),
    ("beta", &[2.0, 3.0, 0.0, 1.0], (0.0, 1.0)),
    ("studentt", &[4.0, 0.0], (-6.0, 6.0)),
    ("binomial", &[40.0, 0.3], (0.0, 40.0)),
    ("hypergeom", &[60.0, 20.0, 15.0], (0.0, 15.0)),
];

fn bench_pdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf");
    for &(name, params, (lo, hi)) in CASES {
        let distribution = find(name).unwrap();
        let mut points = generate_points(256, lo, hi, 42);
        if distribution.is_discrete() {
            points.iter_mut().for_each(|x| *x = x.floor());
        }

        group.bench_with_input(BenchmarkId::new(name, points.len()), &points, |b, points| {
            b.iter(|| {
                points
                    .iter()
                    .map(|&x| distribution.density(black_box(x), params).unwrap())
                    .sum::<f64>()
            })
        });
    }
    group.finish();
}

fn bench_cdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("cdf");
    for &(name, params, (lo, hi)) in CASES {
        let distribution = find(name).unwrap();
        let points = generate_points(256, lo, hi, 7);

        group.bench_with_input(BenchmarkId::new(name, points.len()), &points, |b, points| {
            b.iter(|| {
                points
                    .iter()
                    .map(|&x| distribution.cumulative(black_box(x), params).unwrap())
                    .sum::<f64>()
            })
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    for &(name, params, _) in CASES {
        let distribution = find(name).unwrap();
        let mut rng = RandomSource::seeded(42);

        group.bench_function(name, |b| {
            b.iter(|| distribution.random(black_box(params), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_function_map(c: &mut Criterion) {
    let functions = build_function_map(&RegistryConfig::default().with_seed(42));

    c.bench_function("function_map/normal_cdf", |b| {
        b.iter(|| functions.call("normal_cdf", black_box(&[0.3, 0.0, 1.0])).unwrap())
    });
    c.bench_function("function_map/build", |b| {
        b.iter(|| build_function_map(black_box(&RegistryConfig::default())))
    });
}

criterion_group!(benches, bench_pdf, bench_cdf, bench_random, bench_function_map);
criterion_main!(benches);
