//! Criterion micro-benchmarks for slot store insert, lookup, removal,
//! and bulk traversal.

use berth_bench::{churned_store, filled_store};
use berth_store::{SlotId, SlotStore};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_insert(c: &mut Criterion) {
    c.bench_function("store/insert_fresh_10k", |b| {
        b.iter(|| {
            let mut store = SlotStore::with_capacity(10_000);
            for v in 0..10_000u64 {
                store.insert(black_box(v));
            }
            black_box(store.len())
        });
    });

    c.bench_function("store/insert_recycled_10k", |b| {
        b.iter(|| {
            // Half the ids sit in the free pool; inserts drain it before
            // touching fresh capacity.
            let mut store = churned_store(10_000);
            for v in 0..5_000u64 {
                store.insert(black_box(v));
            }
            black_box(store.live_count())
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let store = filled_store(10_000);
    c.bench_function("store/get_live", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for raw in 0..10_000i64 {
                sum += store.get(black_box(SlotId(raw))).unwrap();
            }
            black_box(sum)
        });
    });

    let churned = churned_store(10_000);
    c.bench_function("store/get_mixed_liveness", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for raw in 0..10_000i64 {
                if churned.get(black_box(SlotId(raw))).is_ok() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("store/remove_interior_10k", |b| {
        b.iter(|| {
            let mut store = filled_store(10_001);
            // Interior ids take the free-list path.
            for raw in 0..10_000i64 {
                store.remove(black_box(SlotId(raw))).unwrap();
            }
            black_box(store.dead_count())
        });
    });

    c.bench_function("store/remove_tail_10k", |b| {
        b.iter(|| {
            let mut store = filled_store(10_000);
            // Reverse-insertion order stays on the truncation fast path.
            for raw in (0..10_000i64).rev() {
                store.remove(black_box(SlotId(raw))).unwrap();
            }
            black_box(store.len())
        });
    });
}

fn bench_bulk(c: &mut Criterion) {
    let store = churned_store(10_000);
    c.bench_function("store/for_each_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            store.for_each(|&v| sum += v);
            black_box(sum)
        });
    });

    c.bench_function("store/update_where_10k", |b| {
        b.iter(|| {
            let mut store = churned_store(10_000);
            store.update_where(|&v| v % 2 == 0, |v| v + 1);
            black_box(store.live_count())
        });
    });
}

criterion_group!(benches, bench_insert, bench_get, bench_remove, bench_bulk);
criterion_main!(benches);
