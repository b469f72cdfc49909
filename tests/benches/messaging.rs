// Benchmarks for end-to-end key agreement and message sealing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use peercrypt::prelude::*;
use peercrypt_tests::{key_pair, seeded_rng};

fn bench_agreement(c: &mut Criterion) {
    let mut group = c.benchmark_group("agreement");
    let (sk_a, _) = key_pair([1u8; 32]);
    let (_, pk_b) = key_pair([2u8; 32]);

    group.bench_function("shared_secret", |b| {
        b.iter(|| black_box(derive_shared_secret(black_box(&sk_a), black_box(&pk_b))))
    });

    group.bench_function("symmetric_key", |b| {
        b.iter(|| black_box(derive_symmetric_key(black_box(&sk_a), black_box(&pk_b))))
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let mut rng = seeded_rng(7);
    let (sk_a, pk_a) = key_pair([1u8; 32]);
    let (sk_b, pk_b) = key_pair([2u8; 32]);
    let nonce = MessageNonce::random(&mut rng);

    for size in [16usize, 256, 4096] {
        let text = "x".repeat(size);
        let wire = seal(&sk_a, &pk_b, &text, &nonce).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("seal", size), &text, |b, text| {
            b.iter(|| black_box(seal(&sk_a, &pk_b, text, &nonce)))
        });
        group.bench_with_input(BenchmarkId::new("open", size), &wire, |b, wire| {
            b.iter(|| black_box(open(&sk_b, &pk_a, wire, &nonce)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_agreement, bench_codec);
criterion_main!(benches);
