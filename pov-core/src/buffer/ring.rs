//! Lock-free single-producer / single-consumer column ring
//!
//! The producer owns `write_end`; the tick handler owns the front and back
//! read cursors. Only `write_end` and the front cursor are shared, each
//! with exactly one writer, so plain atomic loads and stores are enough
//! (no CAS, which thumbv6m does not have).
//!
//! The front cursor points at the column currently on the front LEDs and
//! the back cursor trails it by at most one slot. Pushes stop two slots
//! short of the front cursor, so neither displayed slot can be
//! overwritten:
//!
//! ```text
//!   back  front                    write_end
//!    │     │                          │
//!  ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
//!  │ b │ f │ . │ . │ . │ . │ . │ . │   │   │
//!  └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
//!                 unread columns
//! ```

use portable_atomic::{AtomicU8, AtomicUsize, Ordering};

/// One 8-bit slice of image data
///
/// Odd bit positions belong to the front LED column, even ones to the back.
pub type Column = u8;

/// Ring capacity of the reference configuration
pub const DEFAULT_CAPACITY: usize = 16;

/// Fixed-capacity column ring
///
/// Allocated once and never resized. Use [`ColumnBuffer::split`] to obtain
/// the producer and reader halves.
pub struct ColumnBuffer<const N: usize = DEFAULT_CAPACITY> {
    slots: [AtomicU8; N],
    write_end: AtomicUsize,
    read_front: AtomicUsize,
}

impl<const N: usize> ColumnBuffer<N> {
    const CAPACITY_OK: () = assert!(N >= 3, "column buffer needs at least three slots");

    /// Create an empty buffer
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_OK;
        Self {
            slots: [const { AtomicU8::new(0) }; N],
            write_end: AtomicUsize::new(0),
            read_front: AtomicUsize::new(0),
        }
    }

    /// Total number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Split into the producer half and the tick-side reader half
    ///
    /// The exclusive borrow guarantees exactly one of each exists.
    pub fn split(&mut self) -> (ColumnProducer<'_, N>, ColumnReader<'_, N>) {
        let buffer: &Self = self;
        let front = buffer.read_front.load(Ordering::Relaxed);
        (
            ColumnProducer { buffer },
            ColumnReader {
                buffer,
                front,
                back: front,
            },
        )
    }

    /// Number of written columns from `front` up to `write_end`
    fn stored_from(&self, front: usize) -> usize {
        let write_end = self.write_end.load(Ordering::Acquire);
        (write_end + N - front) % N
    }

    fn is_full_at(write_end: usize, read_front: usize) -> bool {
        write_end % N == (read_front + N - 2) % N
    }
}

impl<const N: usize> Default for ColumnBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer half, used from the application context
pub struct ColumnProducer<'a, const N: usize = DEFAULT_CAPACITY> {
    buffer: &'a ColumnBuffer<N>,
}

impl<'a, const N: usize> ColumnProducer<'a, N> {
    /// Store another column if there is room
    ///
    /// Returns `false` (and changes nothing) when the buffer is full; the
    /// caller decides whether to retry later or drop the column.
    pub fn push(&mut self, column: Column) -> bool {
        let write_end = self.buffer.write_end.load(Ordering::Relaxed);
        let read_front = self.buffer.read_front.load(Ordering::Acquire);

        if ColumnBuffer::<N>::is_full_at(write_end, read_front) {
            return false;
        }

        self.buffer.slots[write_end].store(column, Ordering::Relaxed);
        self.buffer
            .write_end
            .store((write_end + 1) % N, Ordering::Release);
        true
    }

    /// Check if the next push would be rejected
    pub fn is_full(&self) -> bool {
        let write_end = self.buffer.write_end.load(Ordering::Relaxed);
        let read_front = self.buffer.read_front.load(Ordering::Acquire);
        ColumnBuffer::<N>::is_full_at(write_end, read_front)
    }

    /// Columns currently buffered, including the one on the front LEDs
    pub fn len(&self) -> usize {
        let read_front = self.buffer.read_front.load(Ordering::Acquire);
        self.buffer.stored_from(read_front)
    }

    /// Check if nothing has been buffered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes that would succeed right now
    pub fn free_slots(&self) -> usize {
        (N - 2).saturating_sub(self.len())
    }

    /// Total number of slots
    pub const fn capacity(&self) -> usize {
        N
    }
}

/// Reader half, owned by the tick handler
///
/// Holds the front and back cursors. The front cursor is mirrored into the
/// shared buffer so the producer can see how much room there is.
pub struct ColumnReader<'a, const N: usize = DEFAULT_CAPACITY> {
    buffer: &'a ColumnBuffer<N>,
    front: usize,
    back: usize,
}

impl<'a, const N: usize> ColumnReader<'a, N> {
    /// Place the back cursor `lag` slots behind the front cursor
    ///
    /// Called once at driver construction. `lag` is 0 or 1 for any valid
    /// configuration.
    pub fn trail_back(&mut self, lag: usize) {
        self.back = (self.front + N - lag % N) % N;
    }

    /// Front cursor index
    pub fn front(&self) -> usize {
        self.front
    }

    /// Back cursor index
    pub fn back(&self) -> usize {
        self.back
    }

    /// Column under the front cursor
    pub fn front_column(&self) -> Column {
        self.buffer.slots[self.front].load(Ordering::Relaxed)
    }

    /// Column under the back cursor
    pub fn back_column(&self) -> Column {
        self.buffer.slots[self.back].load(Ordering::Relaxed)
    }

    /// Check if the front cursor sits on a written column
    pub fn has_current(&self) -> bool {
        self.buffer.stored_from(self.front) >= 1
    }

    /// Check if a written column follows the one under the front cursor
    pub fn has_next(&self) -> bool {
        self.buffer.stored_from(self.front) >= 2
    }

    /// Move the front cursor onto the next unread column
    ///
    /// Returns `false` without moving when no unread column exists.
    pub fn advance_front(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.front = (self.front + 1) % N;
        self.buffer.read_front.store(self.front, Ordering::Release);
        true
    }

    /// Move the back cursor one column toward `limit`
    ///
    /// `limit` is a front cursor position, current or from earlier in the
    /// tick. Returns `false` without moving when the back cursor is already
    /// there.
    pub fn advance_back(&mut self, limit: usize) -> bool {
        if self.back == limit % N {
            return false;
        }
        self.back = (self.back + 1) % N;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_minus_two_pushes() {
        let mut buffer = ColumnBuffer::<16>::new();
        let (mut producer, _reader) = buffer.split();

        for i in 0..14 {
            assert!(producer.push(i), "push {} should succeed", i);
        }
        assert!(producer.is_full());
        assert!(!producer.push(0xFF));
        assert_eq!(producer.len(), 14);
        assert_eq!(producer.free_slots(), 0);
    }

    #[test]
    fn test_advance_frees_one_slot() {
        let mut buffer = ColumnBuffer::<16>::new();
        let (mut producer, mut reader) = buffer.split();

        while producer.push(0xAA) {}
        assert!(reader.advance_front());

        assert!(producer.push(0x55));
        assert!(!producer.push(0x55));
    }

    #[test]
    fn test_rejected_push_leaves_contents() {
        let mut buffer = ColumnBuffer::<4>::new();
        let (mut producer, mut reader) = buffer.split();

        assert!(producer.push(1));
        assert!(producer.push(2));
        assert!(!producer.push(3));

        assert_eq!(reader.front_column(), 1);
        assert!(reader.advance_front());
        assert_eq!(reader.front_column(), 2);
    }

    #[test]
    fn test_front_stays_on_last_column() {
        let mut buffer = ColumnBuffer::<8>::new();
        let (mut producer, mut reader) = buffer.split();

        assert!(!reader.has_current());
        producer.push(0x81);
        assert!(reader.has_current());
        assert!(!reader.has_next());

        assert!(!reader.advance_front());
        assert_eq!(reader.front(), 0);
        assert_eq!(reader.front_column(), 0x81);
    }

    #[test]
    fn test_back_never_passes_front() {
        let mut buffer = ColumnBuffer::<8>::new();
        let (mut producer, mut reader) = buffer.split();
        reader.trail_back(1);
        assert_eq!(reader.back(), 7);

        producer.push(1);
        producer.push(2);

        assert!(reader.advance_back(reader.front()));
        assert_eq!(reader.back(), 0);
        assert!(!reader.advance_back(reader.front()));

        assert!(reader.advance_front());
        assert!(reader.advance_back(reader.front()));
        assert_eq!(reader.back_column(), 2);
    }

    #[test]
    fn test_back_stops_at_earlier_front() {
        let mut buffer = ColumnBuffer::<8>::new();
        let (mut producer, mut reader) = buffer.split();
        reader.trail_back(1);

        producer.push(1);
        producer.push(2);
        let before = reader.front();
        assert!(reader.advance_front());

        assert!(reader.advance_back(before));
        assert!(!reader.advance_back(before));
        assert_eq!(reader.back_column(), 1);
        assert_eq!(reader.front_column(), 2);
    }

    #[test]
    fn test_wraps_around_many_times() {
        let mut buffer = ColumnBuffer::<5>::new();
        let (mut producer, mut reader) = buffer.split();

        producer.push(0);
        for value in 1..100u8 {
            assert!(producer.push(value));
            assert!(reader.advance_front());
            assert_eq!(reader.front_column(), value);
        }
    }
}
