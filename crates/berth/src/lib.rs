//! Berth: a slot-recycling value store with stable integer handles.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Berth sub-crates. For most users, adding `berth` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use berth::prelude::*;
//!
//! // A registry of connected peers, keyed by slot id.
//! let mut peers: SlotStore<String> = SlotStore::with_capacity(8);
//!
//! let a = peers.insert("10.0.0.1:4001".to_string());
//! let b = peers.insert("10.0.0.2:4002".to_string());
//! assert_eq!(peers.get(a).unwrap(), "10.0.0.1:4001");
//!
//! // Disconnecting frees the slot; the next connect reuses it.
//! peers.remove(a).unwrap();
//! let c = peers.insert("10.0.0.3:4003".to_string());
//! assert_eq!(c, a);
//!
//! // Stale handles fail loudly but harmlessly.
//! assert!(matches!(peers.get(SlotId(99)), Err(StoreError::OutOfRange { .. })));
//! assert_eq!(peers.live_count(), 2);
//! # let _ = b;
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`store`] | `berth-store` | [`store::SlotStore`], [`store::SlotId`], [`store::StoreError`] |
//! | [`queue`] | `berth-queue` | [`queue::Queue`], the FIFO free-id pool |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slot store, handles, and error types (`berth-store`).
pub use berth_store as store;

/// FIFO queue backing the free-id pool (`berth-queue`).
///
/// Exposed for callers who want the queue on its own; the store drives
/// it internally.
pub use berth_queue as queue;

/// Common imports for typical Berth usage.
///
/// ```rust
/// use berth::prelude::*;
/// ```
pub mod prelude {
    pub use berth_queue::Queue;
    pub use berth_store::{SlotId, SlotStore, StoreError};
}
