use criterion::{criterion_group, criterion_main, Criterion};

use densa::Matrix;

// ---------------------------------------------------------------------------
// Helpers: deterministic fills, diagonally dominant for the LU benchmarks
// ---------------------------------------------------------------------------

fn square_f64(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| ((i * 31 + j * 17) % 23) as f64 * 0.5 + 1.0)
}

fn square_f32(n: usize) -> Matrix<f32> {
    Matrix::from_fn(n, n, |i, j| ((i * 31 + j * 17) % 23) as f32 * 0.5 + 1.0)
}

fn invertible_f64(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        ((i * 7 + j * 13) % 11) as f64 * 0.1 + if i == j { (n as f64) + 1.0 } else { 0.0 }
    })
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");

    for n in [16, 64, 256] {
        g.bench_function(format!("f64_{n}"), |b| {
            let a = square_f64(n);
            let m = square_f64(n);
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });
    }

    g.bench_function("f32_256", |b| {
        let a = square_f32(256);
        let m = square_f32(256);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

fn transpose(c: &mut Criterion) {
    let mut g = c.benchmark_group("transpose");

    for n in [64, 256] {
        g.bench_function(format!("f64_{n}"), |b| {
            let a = square_f64(n);
            b.iter(|| std::hint::black_box(&a).transpose())
        });
    }

    g.bench_function("f32_256", |b| {
        let a = square_f32(256);
        b.iter(|| std::hint::black_box(&a).transpose())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Element-wise
// ---------------------------------------------------------------------------

fn elementwise(c: &mut Criterion) {
    let mut g = c.benchmark_group("elementwise");

    g.bench_function("add_128x128_f64", |b| {
        let a = square_f64(128);
        let m = square_f64(128);
        b.iter(|| std::hint::black_box(&a) + std::hint::black_box(&m))
    });

    g.bench_function("scale_128x128_f64", |b| {
        let a = square_f64(128);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(1.0001_f64))
    });

    g.bench_function("vec_dot_4096_f64", |b| {
        let x: Vec<f64> = (0..4096).map(|i| (i % 17) as f64 * 0.25).collect();
        let y: Vec<f64> = (0..4096).map(|i| (i % 13) as f64 * 0.75).collect();
        b.iter(|| densa::vecmath::dot(std::hint::black_box(&x), std::hint::black_box(&y)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// LU-backed inverse and determinant
// ---------------------------------------------------------------------------

fn lu_backed(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu");

    for n in [10, 50] {
        g.bench_function(format!("inverse_f64_{n}"), |b| {
            let a = invertible_f64(n);
            b.iter(|| std::hint::black_box(&a).inverse().unwrap())
        });

        g.bench_function(format!("det_f64_{n}"), |b| {
            let a = invertible_f64(n);
            b.iter(|| std::hint::black_box(&a).det().unwrap())
        });
    }

    g.finish();
}

criterion_group!(benches, matmul, transpose, elementwise, lu_backed);
criterion_main!(benches);
