use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sonic_atoi::leading_zero_count_u64;

fn inputs() -> Vec<u64> {
    let mut x = 0x9E37_79B9_7F4A_7C15u64;
    (0..1024)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x >> (x % 64)
        })
        .collect()
}

fn bench_clz(c: &mut Criterion) {
    let data = inputs();

    c.bench_function("sonic-atoi clz64", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for x in &data {
                sum += leading_zero_count_u64(black_box(*x));
            }
            sum
        })
    });

    c.bench_function("std leading_zeros", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for x in &data {
                sum += black_box(*x).leading_zeros();
            }
            sum
        })
    });
}

criterion_group!(benches, bench_clz);
criterion_main!(benches);
