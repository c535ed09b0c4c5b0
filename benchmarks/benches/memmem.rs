// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! memmem benchmarks: near-miss vs absent vs single-byte needles

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use fixbuf::memmem;

fn bench_memmem(c: &mut Criterion) {
    let mut group = c.benchmark_group("memmem");

    for size in [64usize, 256, 1024, 4096, 16384] {
        // Every position passes the first-byte check; the match sits at the tail.
        let needle = b"aaaab";
        let mut near_miss = vec![b'a'; size];
        let tail = size - needle.len();
        near_miss[tail..].copy_from_slice(needle);

        let sparse: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("{}B/near_miss", size), |b| {
            b.iter(|| memmem(black_box(&near_miss), black_box(needle)));
        });

        group.bench_function(format!("{}B/absent", size), |b| {
            b.iter(|| memmem(black_box(&sparse), black_box(b"\xFF\xFE")));
        });

        group.bench_function(format!("{}B/single_byte", size), |b| {
            b.iter(|| memmem(black_box(&sparse), black_box(&[0xFA])));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_memmem);
criterion_main!(benches);
