//! Slot-recycling value storage for the Berth workspace.
//!
//! Provides [`SlotStore`], a growable, index-addressed container that
//! hands out stable integer handles ([`SlotId`]) and recycles vacated
//! positions through a FIFO free-id pool.
//!
//! # Architecture
//!
//! ```text
//! SlotStore<T>
//! ├── Vec<Option<T>>        (backing sequence; Some = live, None = dead)
//! │     len()      → high-water mark of allocated positions
//! │     capacity() → current allocation size
//! └── berth_queue::Queue<usize>  (dead ids awaiting reuse, FIFO)
//! ```
//!
//! Insertion prefers recycled ids over fresh positions, keeping the
//! backing sequence compact before it grows. Every failure mode for a
//! caller-supplied id is a typed [`StoreError`] and leaves the store
//! untouched.
//!
//! # Threading
//!
//! The store is single-threaded. Callers sharing one across threads must
//! provide their own mutual exclusion (e.g. a mutex per store, held for
//! the duration of each operation).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod store;

// Public re-exports for the primary API surface.
pub use error::StoreError;
pub use id::SlotId;
pub use store::SlotStore;
