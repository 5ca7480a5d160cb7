// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for tower-field multiplication and inversion.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tower_gf::masked::{self, Shares};
use tower_gf::{Gf256, gf16, gf256, gf256_invert};

fn bench_gf16(c: &mut Criterion) {
    c.bench_function("gf16/multiply", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for x in 0..16 {
                acc ^= gf16::multiply(black_box(x), black_box(0xb));
            }
            acc
        });
    });
    c.bench_function("gf16/invert", |b| {
        b.iter(|| (0..16).fold(0u8, |acc, x| acc ^ gf16::invert(black_box(x))));
    });
}

fn bench_gf256(c: &mut Criterion) {
    c.bench_function("gf256/invert_all", |b| {
        b.iter(|| (0..=255u8).fold(0u8, |acc, x| acc ^ gf256_invert(black_box(x))));
    });
    c.bench_function("gf256/multiply_all", |b| {
        b.iter(|| (0..=255u8).fold(0u8, |acc, x| acc ^ gf256::multiply(black_box(x), 0x53)));
    });
    c.bench_function("gf256/typed_invert", |b| {
        let x = Gf256::from_masked(0x53);
        b.iter(|| black_box(x).invert_or_zero());
    });
}

fn bench_masked(c: &mut Criterion) {
    let mut rng = rand::rng();
    let x2 = Shares::<2>::share(0x53, &mut rng);
    let x4 = Shares::<4>::share(0x53, &mut rng);

    c.bench_function("masked/gf256_invert/2-shares", |b| {
        b.iter(|| masked::gf256_invert(black_box(&x2), &mut rng));
    });
    c.bench_function("masked/gf256_invert/4-shares", |b| {
        b.iter(|| masked::gf256_invert(black_box(&x4), &mut rng));
    });
}

criterion_group!(benches, bench_gf16, bench_gf256, bench_masked);
criterion_main!(benches);
