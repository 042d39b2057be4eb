use criterion::{black_box, criterion_group, criterion_main, Criterion};
use field::{Goldilocks, QuinticExtension};

fn bench_goldilocks_mul(c: &mut Criterion) {
    c.bench_function("goldilocks_mul", |bencher| {
        let a = Goldilocks::new(0x1234_5678_9abc_def0);
        let b = Goldilocks::new(0x0fed_cba9_8765_4321);
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_goldilocks_inverse(c: &mut Criterion) {
    c.bench_function("goldilocks_inverse", |bencher| {
        let a = Goldilocks::new(0x1234_5678_9abc_def0);
        bencher.iter(|| black_box(black_box(a).inverse_or_zero()))
    });
}

fn bench_quintic_mul(c: &mut Criterion) {
    c.bench_function("quintic_mul", |bencher| {
        let a = QuinticExtension::from_u64s([1, 2, 3, 4, 5]);
        let b = QuinticExtension::from_u64s([5, 4, 3, 2, 1]);
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_quintic_square(c: &mut Criterion) {
    c.bench_function("quintic_square", |bencher| {
        let a = QuinticExtension::from_u64s([1, 2, 3, 4, 5]);
        bencher.iter(|| black_box(black_box(a).square()))
    });
}

fn bench_quintic_inverse(c: &mut Criterion) {
    c.bench_function("quintic_inverse", |bencher| {
        let a = QuinticExtension::from_u64s([1, 2, 3, 4, 5]);
        bencher.iter(|| black_box(black_box(a).inverse_or_zero()))
    });
}

fn bench_quintic_sqrt(c: &mut Criterion) {
    c.bench_function("quintic_sqrt", |bencher| {
        let a = QuinticExtension::from_u64s([1, 2, 3, 4, 5]).square();
        bencher.iter(|| black_box(black_box(a).sqrt()))
    });
}

criterion_group!(
    benches,
    bench_goldilocks_mul,
    bench_goldilocks_inverse,
    bench_quintic_mul,
    bench_quintic_square,
    bench_quintic_inverse,
    bench_quintic_sqrt
);
criterion_main!(benches);
