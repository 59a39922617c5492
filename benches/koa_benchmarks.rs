// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Criterion benchmarks for the Koa cuckoo store.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use koa_cuckoo_lib::{HashFunctionPair, KoaCuckooStore, KoaCuckooStoreConfig, TableId};

fn bench_hash_pair(c: &mut Criterion) {
    let pair = HashFunctionPair::new(1021, 39);
    let key = "benchmark-key-0123456789";

    c.bench_function("hash_pair_slot_index", |b| {
        b.iter(|| {
            let primary = pair.slot_index(TableId::Primary, black_box(key));
            let secondary = pair.slot_index(TableId::Secondary, black_box(key));
            black_box((primary, secondary))
        })
    });
}

fn bench_insert(c: &mut Criterion) {
    let keys: Vec<String> = (0..512).map(|i| format!("key-{i:04}")).collect();

    c.bench_function("store_insert_512_keys", |b| {
        b.iter(|| {
            let config = KoaCuckooStoreConfig::new().with_table_capacity(4093);
            let mut store = KoaCuckooStore::with_config(config);
            for key in &keys {
                let _ = store.insert(black_box(key));
            }
            black_box(store.len())
        })
    });
}

fn bench_contains(c: &mut Criterion) {
    let config = KoaCuckooStoreConfig::new().with_table_capacity(4093);
    let mut store = KoaCuckooStore::with_config(config);
    for i in 0..512 {
        let _ = store.insert(&format!("key-{i:04}"));
    }

    c.bench_function("store_contains", |b| {
        b.iter(|| black_box(store.contains(black_box("key-0256"))))
    });
}

criterion_group!(benches, bench_hash_pair, bench_insert, bench_contains);
criterion_main!(benches);
