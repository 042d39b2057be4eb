use criterion::{Criterion, black_box, criterion_group, criterion_main};
use field::Goldilocks;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{SigningKey, VerifyingKey, hash_message};

fn message() -> [Goldilocks; 3] {
    [Goldilocks::new(1), Goldilocks::new(2), Goldilocks::new(3)]
}

fn bench_keygen(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);

    c.bench_function("schnorr_pk_from_sk", |bencher| {
        bencher.iter(|| black_box(black_box(&sk).verifying_key()))
    });
}

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let m_hashed = hash_message(&message());

    c.bench_function("schnorr_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign(black_box(&m_hashed));
            black_box(sig);
        })
    });

    c.bench_function("schnorr_sign_hedged", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign_with_rng(&mut rng, black_box(&m_hashed));
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);
    let m_hashed = hash_message(&message());
    let sig = sk.sign(&m_hashed);

    c.bench_function("schnorr_verify", |bencher| {
        bencher.iter(|| {
            let ok = vk.verify(black_box(&m_hashed), black_box(&sig));
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify);
criterion_main!(benches);
