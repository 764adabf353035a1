//! Benchmark fixtures for the Berth slot store.
//!
//! Provides pre-built store populations so individual benches measure
//! one operation, not setup:
//!
//! - [`filled_store`]: `n` live slots, empty free pool — the steady
//!   state of a registry that only grows.
//! - [`churned_store`]: `n` allocated positions with every other slot
//!   freed — the steady state of a registry under connect/disconnect
//!   churn, with a deep free pool.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use berth_store::{SlotId, SlotStore};

/// Build a store holding `n` live `u64` values at ids `0..n`.
pub fn filled_store(n: usize) -> SlotStore<u64> {
    let mut store = SlotStore::with_capacity(n);
    for v in 0..n as u64 {
        store.insert(v);
    }
    store
}

/// Build a store with `n` allocated positions where every odd id has
/// been freed (skipping the tail position, so the ids land in the free
/// pool rather than truncating).
pub fn churned_store(n: usize) -> SlotStore<u64> {
    let mut store = filled_store(n);
    for id in (1..n.saturating_sub(1)).step_by(2) {
        store
            .remove(SlotId(id as i64))
            .expect("odd non-tail ids are live in a freshly filled store");
    }
    store
}
