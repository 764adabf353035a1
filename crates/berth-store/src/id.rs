//! The strongly-typed slot handle.

use std::fmt;

/// Stable integer handle identifying one backing-sequence position in a
/// [`SlotStore`](crate::SlotStore).
///
/// Ids are assigned by [`SlotStore::insert`](crate::SlotStore::insert)
/// and stay valid until the slot is removed. A removed id may later be
/// handed out again for a new value — there is no generation counter, so
/// callers holding ids across removals get the explicit
/// [`AlreadyRemoved`](crate::StoreError::AlreadyRemoved) error at worst,
/// not detection of reuse.
///
/// The inner value is signed so that negative ids (a common caller bug
/// when handles are stored in wider protocol fields) are representable
/// and rejected with a distinct error instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub i64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SlotId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}
