use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::{double_scalar_mul_basepoint, mul_generator, Group, Projective, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_double(c: &mut Criterion) {
    let g = Projective::GENERATOR;
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_mdouble(c: &mut Criterion) {
    let g = Projective::GENERATOR;
    c.bench_function("projective_mdouble_5", |bencher| {
        bencher.iter(|| black_box(black_box(g).mdouble(5)))
    });
}

fn bench_add(c: &mut Criterion) {
    let g = Projective::GENERATOR;
    let h = g.mul_u64(12345);
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_add_affine(c: &mut Criterion) {
    let g = Projective::GENERATOR;
    let h = g.mul_u64(12345).to_affine();
    c.bench_function("projective_add_affine", |bencher| {
        bencher.iter(|| black_box(black_box(g).add_affine(black_box(&h))))
    });
}

fn bench_encode_decode(c: &mut Criterion) {
    let p = Projective::GENERATOR.mul_u64(777);
    let w = p.encode();
    c.bench_function("point_encode", |bencher| {
        bencher.iter(|| black_box(black_box(p).encode()))
    });
    c.bench_function("point_decode", |bencher| {
        bencher.iter(|| black_box(Projective::decode(black_box(&w))))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let p = Projective::GENERATOR.mul_u64(31337);
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("scalar_mul_windowed", |bencher| {
        bencher.iter(|| black_box(black_box(p).mul_scalar(black_box(&scalar))))
    });
    c.bench_function("scalar_mul_double_and_add", |bencher| {
        bencher.iter(|| black_box(black_box(p).scalar_mul(black_box(&scalar))))
    });
    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(mul_generator(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul(c: &mut Criterion) {
    let p = Projective::GENERATOR.mul_u64(31337);
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| black_box(double_scalar_mul_basepoint(black_box(&a), black_box(&b), black_box(&p))))
    });
}

fn bench_batch_to_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_to_affine");

    for size in [1, 16, 64, 256].iter() {
        let g = Projective::GENERATOR;
        let points: Vec<Projective> = (0..*size).map(|i| g.mul_u64(i as u64 + 1)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(Projective::batch_to_affine(black_box(&points))))
        });
    }
    group.finish();
}

fn bench_msm(c: &mut Criterion) {
    let mut group = c.benchmark_group("projective_msm");

    for size in [2, 4, 8, 16].iter() {
        let mut rng = StdRng::seed_from_u64(12345);
        let g = Projective::GENERATOR;

        let points: Vec<Projective> = (0..*size).map(|i| g.mul_u64(i as u64 + 1)).collect();
        let scalars: Vec<ScalarField> = (0..*size).map(|_| random_scalar(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| {
                black_box(<Projective as Group>::multi_scalar_mul(
                    black_box(&points),
                    black_box(&scalars),
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_double,
    bench_mdouble,
    bench_add,
    bench_add_affine,
    bench_encode_decode,
    bench_scalar_mul,
    bench_double_scalar_mul,
    bench_batch_to_affine,
    bench_msm
);
criterion_main!(benches);
