// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BufferPool benchmarks: list_get + list_return churn

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fixbuf::{Buffer, BufferPool, PoolStorage};

const SLOTS: usize = 64;
const CHUNK: usize = 256;

fn bench_get_return(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool/get_return");

    group.bench_function("first_slot", |b| {
        let mut storage = PoolStorage::<SLOTS, CHUNK>::new();
        let mut blocks = [Buffer::UNINIT; SLOTS];
        let mut pool = BufferPool::with_storage(&mut blocks, &mut storage);

        b.iter(|| {
            let mut handle = pool.list_get();
            black_box(&handle);
            pool.list_return(&mut handle);
        });
    });

    group.bench_function("last_slot", |b| {
        let mut storage = PoolStorage::<SLOTS, CHUNK>::new();
        let mut blocks = [Buffer::UNINIT; SLOTS];
        let mut pool = BufferPool::with_storage(&mut blocks, &mut storage);

        // Checkout has to scan past every held slot.
        let _held: Vec<_> = (0..SLOTS - 1).map(|_| pool.list_get()).collect();

        b.iter(|| {
            let mut handle = pool.list_get();
            black_box(&handle);
            pool.list_return(&mut handle);
        });
    });

    group.finish();
}

fn bench_list_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool/list_init");

    group.bench_function(format!("{}x{}B", SLOTS, CHUNK), |b| {
        let mut data = vec![0u8; SLOTS * CHUNK];

        b.iter(|| {
            let mut blocks = [Buffer::UNINIT; SLOTS];
            let pool = BufferPool::list_init(SLOTS, &mut blocks, &mut data, CHUNK)
                .expect("Failed to list_init(..)");
            black_box(pool.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_return, bench_list_init);
criterion_main!(benches);
