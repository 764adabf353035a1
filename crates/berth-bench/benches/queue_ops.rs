//! Criterion micro-benchmarks for the free-id queue.

use berth_queue::Queue;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_push_pop(c: &mut Criterion) {
    c.bench_function("queue/push_10k", |b| {
        b.iter(|| {
            let mut q = Queue::new();
            for v in 0..10_000usize {
                q.push(black_box(v));
            }
            black_box(q.len())
        });
    });

    c.bench_function("queue/push_pop_cycle_10k", |b| {
        b.iter(|| {
            // Steady-state ring traffic: the buffer wraps without growing.
            let mut q = Queue::new();
            for v in 0..64usize {
                q.push(v);
            }
            let mut sum = 0usize;
            for v in 64..10_064usize {
                sum += q.pop().expect("queue holds 64 elements");
                q.push(black_box(v));
            }
            black_box(sum)
        });
    });

    c.bench_function("queue/drain_10k", |b| {
        b.iter(|| {
            let mut q = Queue::new();
            for v in 0..10_000usize {
                q.push(v);
            }
            let mut sum = 0usize;
            while let Some(v) = q.pop() {
                sum += v;
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_push_pop);
criterion_main!(benches);
