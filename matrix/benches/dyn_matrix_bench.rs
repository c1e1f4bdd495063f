use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix::{solver, DynMatrix, DynVector, Float, Matrix4, Vector4};

pub fn add_into(c: &mut Criterion) {
    let this = black_box(DynMatrix::new(1.23123, 25, 25));
    let other = black_box(DynMatrix::new(1.23123, 25, 25));
    let mut into = black_box(DynMatrix::zeros(25, 25));

    c.bench_function("add_into", |b| b.iter(|| this.add_into(&other, &mut into)));
}

pub fn sub_into(c: &mut Criterion) {
    let this = black_box(DynMatrix::new(1.23123, 25, 25));
    let other = black_box(DynMatrix::new(1.23123, 25, 25));
    let mut into = black_box(DynMatrix::zeros(25, 25));

    c.bench_function("sub_into", |b| b.iter(|| this.sub_into(&other, &mut into)));
}

pub fn scale_into(c: &mut Criterion) {
    let this = black_box(DynMatrix::new(1.23123, 25, 25));
    let mut into = black_box(DynMatrix::zeros(25, 25));

    c.bench_function("scale_into", |b| {
        b.iter(|| this.scale_into(black_box(22.0), &mut into))
    });
}

pub fn prod_into(c: &mut Criterion) {
    let this = black_box(DynMatrix::new(1.23123, 30, 30));
    let other = black_box(DynMatrix::new(1.23123, 30, 30));
    let mut into = black_box(DynMatrix::zeros(30, 30));

    c.bench_function("prod_into", |b| {
        b.iter(|| this.prod_into(&other, &mut into))
    });
}

pub fn prod(c: &mut Criterion) {
    let this = black_box(DynMatrix::new(1.23123, 30, 30));
    let other = black_box(DynMatrix::new(1.23123, 30, 30));

    c.bench_function("prod", |b| b.iter(|| &this * &other));
}

pub fn small_prod(c: &mut Criterion) {
    let this = black_box(Matrix4::new(1.23123));
    let other = black_box(Matrix4::new(3.2));
    let v = black_box(Vector4::new(1.0, 2.0, 3.0, 4.0));

    c.bench_function("small_prod", |b| b.iter(|| (this * other) * v));
}

pub fn gauss_jordan(c: &mut Criterion) {
    let n = 30;
    let mut a = DynMatrix::new(2.0 * n as Float, n, n);
    for col in 0..n {
        for row in 0..n {
            if row != col {
                a[col][row] = ((row * 7 + col * 3) % 11) as Float / 11.0;
            }
        }
    }
    let a = black_box(a);
    let x = DynVector::new(n, 1.0);
    let rhs = black_box(&a * &x);

    c.bench_function("gauss_jordan", |b| {
        b.iter(|| solver::gauss_jordan(&a, &rhs))
    });
}

criterion_group!(
    benches,
    add_into,
    sub_into,
    scale_into,
    prod_into,
    prod,
    small_prod,
    gauss_jordan
);
criterion_main!(benches);
