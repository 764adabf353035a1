//! Store-specific error types.

use std::error::Error;
use std::fmt;

use crate::id::SlotId;

/// Errors for caller-supplied slot ids.
///
/// Every variant is non-fatal and leaves the store unchanged — a failing
/// call is a no-op on internal state. The variants are distinguishable
/// so calling code can branch on them: `AlreadyRemoved` is a benign
/// idempotent-remove for registries that disconnect twice, while
/// `OutOfRange` and `NegativeId` indicate a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The id is negative. Negative ids are never valid, and get their
    /// own variant so callers can special-case sign bugs.
    NegativeId {
        /// The offending id.
        id: SlotId,
    },
    /// The id is at or past the store's high-water mark.
    OutOfRange {
        /// The offending id.
        id: SlotId,
        /// High-water mark at the time of the call; valid ids are below it.
        length: usize,
    },
    /// The id is in range but its slot was removed and not yet reused.
    AlreadyRemoved {
        /// The offending id.
        id: SlotId,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeId { id } => {
                write!(f, "negative id {id} is not supported")
            }
            Self::OutOfRange { id, length } => {
                write!(f, "id {id} out of range: store length is {length}")
            }
            Self::AlreadyRemoved { id } => {
                write!(f, "slot {id} already removed")
            }
        }
    }
}

impl Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_id() {
        let err = StoreError::OutOfRange {
            id: SlotId(12),
            length: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("4"));
    }

    #[test]
    fn variants_are_distinguishable() {
        let neg = StoreError::NegativeId { id: SlotId(-1) };
        let removed = StoreError::AlreadyRemoved { id: SlotId(0) };
        assert_ne!(neg, removed);
        assert!(matches!(neg, StoreError::NegativeId { .. }));
    }
}
