//! First-in-first-out queue for the Berth slot store.
//!
//! This is the leaf crate with zero dependencies. It provides [`Queue`],
//! the FIFO pool the slot store uses to recycle vacated slot ids, usable
//! on its own for any unbounded FIFO need.
//!
//! [`Queue`] is a growable ring buffer: a `Vec<Option<T>>` with a head
//! cursor and an occupancy count. When the ring fills, elements are
//! re-linearised into a buffer of twice the size, so `push` and `pop`
//! stay O(1) amortised. Popping from an empty queue is a normal,
//! frequent condition for the free-id pool, so absence is signalled with
//! `None` rather than an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// An unbounded FIFO queue backed by a growable ring buffer.
///
/// Elements pop in exactly the order they were pushed. The queue has no
/// terminal state — it is reusable indefinitely, and draining it leaves
/// the backing allocation in place for the next fill.
///
/// # Examples
///
/// ```
/// use berth_queue::Queue;
///
/// let mut q = Queue::new();
/// q.push(1);
/// q.push(2);
/// assert_eq!(q.pop(), Some(1));
/// assert_eq!(q.pop(), Some(2));
/// assert_eq!(q.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Queue<T> {
    /// Ring storage. The `len` positions starting at `head` (wrapping)
    /// are occupied; every other position is vacant.
    buf: Vec<Option<T>>,
    /// Index of the oldest element, meaningful only when `len > 0`.
    head: usize,
    /// Number of occupied positions.
    len: usize,
}

impl<T> Queue<T> {
    /// Smallest ring allocated on the first push.
    const MIN_CAPACITY: usize = 8;

    /// Create an empty queue. Allocates nothing until the first push.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Append `value` at the tail of the queue.
    ///
    /// Grows the ring (doubling, re-linearised from `head`) when full.
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.buf.len();
        self.buf[tail] = Some(value);
        self.len += 1;
    }

    /// Remove and return the oldest element, or `None` if the queue is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head]
            .take()
            .expect("ring positions within [head, head + len) are occupied");
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Some(value)
    }

    /// Number of elements currently queued.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replace the full ring with one of double the capacity, moving the
    /// occupants to the front in FIFO order.
    fn grow(&mut self) {
        let new_cap = (self.buf.len() * 2).max(Self::MIN_CAPACITY);
        let mut buf = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            let idx = (self.head + i) % self.buf.len();
            buf.push(self.buf[idx].take());
        }
        buf.resize_with(new_cap, || None);
        self.buf = buf;
        self.head = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
