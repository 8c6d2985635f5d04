use thiserror::Error;

/// Errors that can occur while resizing a ring buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("cannot shrink capacity {size} by {amount}, capacity must stay positive")]
    InvalidSize { size: usize, amount: usize },
}

/// Circular buffer with a rotating write cursor and in-place resizing.
///
/// The cursor marks the next slot to be overwritten; once the buffer has
/// wrapped, that is also the oldest live element. Reading `len()` elements
/// starting at the cursor (wrapping) yields insertion order, oldest first.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    storage: Vec<T>,
    cursor: usize,
}

impl<T: Clone + Default> RingBuffer<T> {
    /// Create a buffer of `size` zero-valued (`T::default()`) slots.
    ///
    /// A zero-capacity buffer is constructible, but `push` and `peek`
    /// require at least one slot.
    pub fn new(size: usize) -> Self {
        Self {
            storage: vec![T::default(); size],
            cursor: 0,
        }
    }

    /// Overwrite the slot at the cursor, returning the evicted value.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has zero capacity.
    pub fn push(&mut self, value: T) -> T {
        let evicted = std::mem::replace(&mut self.storage[self.cursor], value);
        self.cursor = (self.cursor + 1) % self.storage.len();
        evicted
    }

    /// Current capacity. Not a fill count: the buffer has no notion of how
    /// many slots hold real data.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Element `offset` positions ahead of the cursor, wrapping. Offset 0
    /// is the next slot due to be overwritten.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has zero capacity.
    pub fn peek(&self, offset: usize) -> &T {
        &self.storage[(self.cursor + offset) % self.storage.len()]
    }

    /// Raw backing storage in physical order. Not ordering-safe on its own;
    /// use `peek` for logical order.
    pub fn buffer(&self) -> &[T] {
        &self.storage
    }

    /// Grow or shrink to the given capacity. No-op when equal. Fails if the
    /// target capacity would not be positive.
    pub fn resize(&mut self, size: usize) -> Result<(), RingBufferError> {
        if size > self.storage.len() {
            self.grow(size - self.storage.len());
        } else if size < self.storage.len() {
            self.shrink(self.storage.len() - size)?;
        }

        Ok(())
    }

    /// Increase capacity by `amount`, returning the added elements.
    ///
    /// The new zero-valued slots are spliced in at the cursor, so they take
    /// the least-recent logical positions and every existing element keeps
    /// its place in insertion order. Nothing is evicted.
    pub fn grow(&mut self, amount: usize) -> Vec<T> {
        let added = vec![T::default(); amount];
        self.storage
            .splice(self.cursor..self.cursor, added.iter().cloned());
        tracing::trace!(added = amount, capacity = self.storage.len(), "grew ring buffer");
        added
    }

    /// Decrease capacity by `amount`, returning the removed elements.
    ///
    /// Removal consumes the oldest logical elements first, starting at the
    /// cursor and wrapping, and the returned vector is in that order. Fails
    /// with `InvalidSize` if `amount >= len()`, leaving the buffer
    /// untouched.
    pub fn shrink(&mut self, amount: usize) -> Result<Vec<T>, RingBufferError> {
        if amount >= self.storage.len() {
            return Err(RingBufferError::InvalidSize {
                size: self.storage.len(),
                amount,
            });
        }

        let mut removed = Vec::with_capacity(amount);
        for _ in 0..amount {
            if self.cursor >= self.storage.len() {
                self.cursor = 0;
            }
            removed.push(self.storage.remove(self.cursor));
        }
        if self.cursor >= self.storage.len() {
            self.cursor = 0;
        }

        tracing::trace!(removed = amount, capacity = self.storage.len(), "shrank ring buffer");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Buffer contents in logical order, oldest first.
    fn logical(buf: &RingBuffer<i32>) -> Vec<i32> {
        (0..buf.len()).map(|i| *buf.peek(i)).collect()
    }

    fn filled_buffer(capacity: usize, pushes: i32) -> RingBuffer<i32> {
        let mut buf = RingBuffer::new(capacity);
        for v in 1..=pushes {
            buf.push(v);
        }
        buf
    }

    #[test]
    fn new_buffer_is_zeroed() {
        let buf: RingBuffer<i32> = RingBuffer::new(4);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.buffer(), &[0, 0, 0, 0]);
    }

    #[test]
    fn push_returns_evicted_value() {
        let mut buf = RingBuffer::new(2);
        assert_eq!(buf.push(1), 0);
        assert_eq!(buf.push(2), 0);
        assert_eq!(buf.push(3), 1);
        assert_eq!(buf.push(4), 2);
    }

    #[test]
    fn peek_zero_is_oldest_after_wrap() {
        // For any number of pushes >= capacity, peek(0) is the value pushed
        // exactly `capacity` pushes ago.
        let capacity = 4;
        let mut buf = RingBuffer::new(capacity);
        for v in 1..=20 {
            buf.push(v);
            if v >= capacity as i32 {
                assert_eq!(*buf.peek(0), v - capacity as i32 + 1);
            }
        }
    }

    #[test]
    fn logical_order_is_insertion_order() {
        let buf = filled_buffer(5, 7);
        assert_eq!(logical(&buf), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn grow_preserves_order_and_evicts_nothing() {
        let buf = filled_buffer(3, 4); // logical [2, 3, 4]
        let mut grown = buf.clone();
        let added = grown.grow(2);

        assert_eq!(added, vec![0, 0]);
        assert_eq!(grown.len(), 5);
        // New slots sit at the least-recent positions; the real elements
        // keep their relative order.
        assert_eq!(logical(&grown), vec![0, 0, 2, 3, 4]);
    }

    #[test]
    fn grow_from_zero_capacity() {
        let mut buf: RingBuffer<i32> = RingBuffer::new(0);
        buf.grow(3);
        assert_eq!(buf.len(), 3);
        buf.push(7);
        assert_eq!(*buf.peek(2), 7);
    }

    #[test]
    fn shrink_removes_oldest_first() {
        let mut buf = filled_buffer(5, 7); // logical [3, 4, 5, 6, 7]
        let removed = buf.shrink(2).unwrap();

        assert_eq!(removed, vec![3, 4]);
        assert_eq!(buf.len(), 3);
        assert_eq!(logical(&buf), vec![5, 6, 7]);
    }

    #[test]
    fn shrink_wraps_past_end_of_storage() {
        // Cursor near the physical end forces the wrap reset mid-removal.
        let mut buf = filled_buffer(3, 5); // logical [3, 4, 5], cursor at 2
        let removed = buf.shrink(2).unwrap();

        assert_eq!(removed, vec![3, 4]);
        assert_eq!(logical(&buf), vec![5]);
    }

    #[test]
    fn shrink_to_zero_or_below_is_rejected() {
        let mut buf = filled_buffer(3, 3);
        let before = buf.clone();

        for amount in [3, 4, 100] {
            let err = buf.shrink(amount).unwrap_err();
            assert_eq!(err, RingBufferError::InvalidSize { size: 3, amount });
            // Failure leaves capacity, contents, and cursor untouched.
            assert_eq!(buf.buffer(), before.buffer());
            assert_eq!(logical(&buf), logical(&before));
        }
    }

    #[test]
    fn resize_dispatches_on_delta() {
        let mut buf = filled_buffer(3, 4); // logical [2, 3, 4]

        buf.resize(5).unwrap();
        assert_eq!(logical(&buf), vec![0, 0, 2, 3, 4]);

        buf.resize(2).unwrap();
        assert_eq!(logical(&buf), vec![3, 4]);

        buf.resize(2).unwrap(); // no-op
        assert_eq!(logical(&buf), vec![3, 4]);

        assert!(buf.resize(0).is_err());
        assert_eq!(logical(&buf), vec![3, 4]);
    }

    #[test]
    fn push_after_resize_continues_rotation() {
        let mut buf = filled_buffer(3, 4); // logical [2, 3, 4]
        buf.grow(1); // logical [0, 2, 3, 4]

        // The next push overwrites the new least-recent slot.
        assert_eq!(buf.push(5), 0);
        assert_eq!(logical(&buf), vec![2, 3, 4, 5]);

        buf.shrink(2).unwrap(); // logical [4, 5]
        assert_eq!(buf.push(6), 4);
        assert_eq!(logical(&buf), vec![5, 6]);
    }
}
