//! Benchmarks for transform composition and inversion.
//!
//! Run with: cargo bench
//!
//! The in-place variants are the per-frame hot path; the allocating
//! variants trade one copy per call for leaving the operands untouched.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridscene::Matrix;

fn bench_multiply_self(c: &mut Criterion) {
    // Unit determinant keeps repeated self-composition bounded.
    let other = Matrix::rotation(0.4);

    c.bench_function("multiply_self", |b| {
        let mut m = Matrix::from_elements([1.0, 0.2, -0.2, 1.0, 10.0, 20.0]);
        b.iter(|| {
            m.multiply_self(black_box(&other));
        })
    });
}

fn bench_multiply_allocating(c: &mut Criterion) {
    let m = Matrix::from_elements([1.0, 0.2, -0.2, 1.0, 10.0, 20.0]);
    let other = Matrix::from_elements([2.0, 0.5, -0.5, 2.0, 3.0, -7.0]);

    c.bench_function("multiply", |b| {
        b.iter(|| black_box(&m).multiply(black_box(&other)))
    });
}

fn bench_pre_multiply_self(c: &mut Criterion) {
    let other = Matrix::rotation(0.3);

    c.bench_function("pre_multiply_self", |b| {
        let mut m = Matrix::translation(4.0, 9.0);
        b.iter(|| {
            m.pre_multiply_self(black_box(&other));
        })
    });
}

fn bench_invert_self(c: &mut Criterion) {
    c.bench_function("invert_self", |b| {
        let mut m = Matrix::from_elements([2.0, 1.0, -1.5, 3.0, 10.0, -20.0]);
        b.iter(|| {
            m.invert_self();
        })
    });
}

fn bench_inverse_allocating(c: &mut Criterion) {
    let m = Matrix::from_elements([2.0, 1.0, -1.5, 3.0, 10.0, -20.0]);

    c.bench_function("inverse", |b| b.iter(|| black_box(&m).inverse()));
}

criterion_group!(
    benches,
    bench_multiply_self,
    bench_multiply_allocating,
    bench_pre_multiply_self,
    bench_invert_self,
    bench_inverse_allocating
);
criterion_main!(benches);
