//! The slot store: a growable sequence of live/dead slots with id reuse.

use berth_queue::Queue;

use crate::error::StoreError;
use crate::id::SlotId;

/// A growable, index-addressed store of values with stable handles and
/// slot recycling.
///
/// Each value occupies a slot identified by the [`SlotId`] returned from
/// [`insert`](SlotStore::insert). Removing a value marks its slot dead
/// and (except for the tail fast path below) parks the id in a FIFO free
/// pool, so a later insert revives the same position instead of growing
/// the backing sequence.
///
/// Removing the *highest* allocated position instead truncates the
/// high-water mark: open capacity already covers that index, so
/// free-listing it would only inflate the pool. The two removal paths
/// are deliberate and both observable — after a tail removal the id
/// reads as out of range, after any other removal it reads as already
/// removed.
///
/// The store owns every value outright. [`get`](SlotStore::get) hands
/// out clones, and the only mutation paths are the store's own
/// operators, so callers never hold an alias into the backing sequence.
pub struct SlotStore<T> {
    /// Backing sequence. `slots.len()` is the high-water mark of
    /// positions ever allocated; `Some` = live, `None` = dead.
    slots: Vec<Option<T>>,
    /// Dead slot indices eligible for reuse, oldest first.
    ///
    /// Every queued index is below the high-water mark and refers to a
    /// dead slot. Tail truncation cannot break this: the high-water mark
    /// only shrinks while the tail slot is live, and free-listed ids are
    /// strictly below the tail at push time.
    free: Queue<usize>,
    /// Number of dead slots currently parked in `free`. Informational
    /// only — bounds checks never consult it.
    dead: usize,
}

impl<T> SlotStore<T> {
    /// Create a store with `capacity` backing positions pre-reserved,
    /// all unused.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Queue::new(),
            dead: 0,
        }
    }

    /// Store `value` and return its slot id.
    ///
    /// Recycled ids take priority over fresh positions, keeping the
    /// backing sequence compact before it grows. When no free id exists
    /// and reserved capacity is exhausted, the backing sequence grows by
    /// the standard doubling policy, keeping `insert` O(1) amortised.
    pub fn insert(&mut self, value: T) -> SlotId {
        if let Some(index) = self.free.pop() {
            self.dead -= 1;
            self.slots[index] = Some(value);
            return SlotId(index as i64);
        }

        self.slots.push(Some(value));
        SlotId(self.slots.len() as i64 - 1)
    }

    /// Return a clone of the value in slot `id`.
    ///
    /// Fails with [`StoreError::NegativeId`] for ids below zero,
    /// [`StoreError::OutOfRange`] for ids at or past the high-water
    /// mark, and [`StoreError::AlreadyRemoved`] for dead slots.
    pub fn get(&self, id: SlotId) -> Result<T, StoreError>
    where
        T: Clone,
    {
        let index = self.check_bounds(id)?;
        self.slots[index]
            .clone()
            .ok_or(StoreError::AlreadyRemoved { id })
    }

    /// Remove the value in slot `id`.
    ///
    /// Same failure modes as [`get`](SlotStore::get). On success the
    /// slot is vacated: the tail slot by truncating the high-water mark,
    /// any other slot by free-listing its id for reuse.
    pub fn remove(&mut self, id: SlotId) -> Result<(), StoreError> {
        let index = self.check_bounds(id)?;
        if self.slots[index].is_none() {
            return Err(StoreError::AlreadyRemoved { id });
        }

        if index == self.slots.len() - 1 {
            self.slots.pop();
            return Ok(());
        }

        self.slots[index] = None;
        self.free.push(index);
        self.dead += 1;
        Ok(())
    }

    /// Replace the value in slot `id` with `transform(value)`.
    ///
    /// Fails exactly when [`get`](SlotStore::get) would fail, leaving
    /// every slot untouched; on success the slot stays live.
    pub fn update(
        &mut self,
        id: SlotId,
        transform: impl FnOnce(T) -> T,
    ) -> Result<(), StoreError> {
        let index = self.check_bounds(id)?;
        match self.slots[index].take() {
            Some(value) => {
                self.slots[index] = Some(transform(value));
                Ok(())
            }
            None => Err(StoreError::AlreadyRemoved { id }),
        }
    }

    /// Invoke `visit` on every live value in ascending id order.
    ///
    /// Dead slots are skipped silently. Values are not mutated — this is
    /// the broadcast/side-effect traversal.
    pub fn for_each(&self, mut visit: impl FnMut(&T)) {
        for value in self.slots.iter().flatten() {
            visit(value);
        }
    }

    /// Replace every live value satisfying `predicate` with
    /// `transform(value)`, in ascending id order.
    ///
    /// Dead slots and non-matching values are left untouched. No ids are
    /// reported — this is a bulk in-place map-where.
    pub fn update_where(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
        mut transform: impl FnMut(T) -> T,
    ) {
        for slot in self.slots.iter_mut() {
            if let Some(value) = slot.take() {
                let value = if predicate(&value) {
                    transform(value)
                } else {
                    value
                };
                *slot = Some(value);
            }
        }
    }

    /// High-water mark: number of backing positions ever allocated.
    ///
    /// Not the count of live values — see
    /// [`live_count`](SlotStore::live_count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no backing positions are allocated.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current backing-sequence allocation size.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live values currently stored.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.dead
    }

    /// Number of dead slots parked in the free pool.
    pub fn dead_count(&self) -> usize {
        self.dead
    }

    /// Map `id` to a backing-sequence index, rejecting negative and
    /// out-of-range ids.
    fn check_bounds(&self, id: SlotId) -> Result<usize, StoreError> {
        if id.0 < 0 {
            return Err(StoreError::NegativeId { id });
        }
        let index = id.0 as usize;
        if index >= self.slots.len() {
            return Err(StoreError::OutOfRange {
                id,
                length: self.slots.len(),
            });
        }
        Ok(index)
    }
}

impl<T> Default for SlotStore<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
