use cryptal_digest::hash::sha256::core::sha256;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    c.bench_function("sha256 64 bytes", |b| {
        b.iter(|| sha256(black_box(&[0u8; 64])))
    });

    let data = vec![0xA5u8; 16 * 1024];
    let mut group = c.benchmark_group("sha256 16 KiB");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("native", |b| b.iter(|| sha256(black_box(&data))));
    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
