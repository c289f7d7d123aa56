//! Benchmarks for sparse polynomial arithmetic.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use polycalc::Polynomial;

/// Generates a random polynomial with `terms` insertions spread over exponents 0..4*terms.
fn random_poly(rng: &mut StdRng, terms: usize) -> Polynomial {
    let max_exponent = (terms * 4) as u32;
    (0..terms)
        .map(|_| (rng.random_range(-100i64..=100), rng.random_range(0..max_exponent)))
        .collect()
}

fn bench_add_term(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_term");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [16, 64, 256] {
        let pairs: Vec<(i64, u32)> = (0..size)
            .map(|_| (rng.random_range(-100i64..=100), rng.random_range(0..(size as u32) * 4)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| {
                let mut p = Polynomial::new();
                for &(coefficient, exponent) in pairs {
                    p.add_term(coefficient, exponent);
                }
                black_box(p)
            })
        });
    }

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [16, 64, 256] {
        let p = random_poly(&mut rng, size);
        let q = random_poly(&mut rng, size);

        group.bench_with_input(BenchmarkId::new("add", size), &size, |b, _| {
            b.iter(|| black_box(&p + &q))
        });
        group.bench_with_input(BenchmarkId::new("subtract", size), &size, |b, _| {
            b.iter(|| black_box(&p - &q))
        });
        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |b, _| {
            b.iter(|| black_box(&p * &q))
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let p = random_poly(&mut rng, 256);

    c.bench_function("evaluate_256", |b| b.iter(|| black_box(p.evaluate(black_box(0.97)))));
}

criterion_group!(benches, bench_add_term, bench_arithmetic, bench_evaluate);
criterion_main!(benches);
