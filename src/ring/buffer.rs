//! The ring buffer - a bounded FIFO byte queue over a borrowed arena.
//!
//! A socket layer keeps one of these per connection to stage bytes between
//! the network and application logic. The buffer borrows its arena and only
//! does index bookkeeping; it never allocates or frees the backing memory.

use bytes::Bytes;

use crate::error::StageError;

/// A bounded FIFO byte queue over a caller-supplied arena.
///
/// `head` marks the next write position and `tail` the next read position,
/// both advancing modulo the arena length. `head == tail` is structurally
/// ambiguous between "empty" and "completely full", so a dedicated `full`
/// flag disambiguates: the equality means empty while the flag is unset and
/// full while it is set. No other representation of the stored count exists.
///
/// Pushing into a full buffer is refused and leaves the buffer untouched;
/// there is no overwrite-oldest mode.
///
/// # Arena contract
///
/// The arena is allocated and owned by the caller and must outlive the
/// buffer, which the borrow enforces. A zero-length arena is rejected at
/// construction with [`StageError::EmptyArena`].
///
/// # Concurrency
///
/// Not internally thread-safe. Sharing one buffer across threads requires
/// external synchronization.
///
/// # Example
///
/// ```
/// use ringstage::RingBuffer;
///
/// let mut arena = [0u8; 4];
/// let mut buf = RingBuffer::new(&mut arena)?;
///
/// buf.bulk_push(b"ab")?;
/// assert_eq!(buf.len(), 2);
/// assert_eq!(buf.pop()?, b'a');
/// assert_eq!(buf.pop()?, b'b');
/// assert!(buf.is_empty());
/// # Ok::<(), ringstage::StageError>(())
/// ```
#[derive(Debug)]
pub struct RingBuffer<'a> {
    arena: &'a mut [u8],
    head: usize,
    tail: usize,
    full: bool,
}

impl<'a> RingBuffer<'a> {
    /// Creates a buffer over the given arena.
    ///
    /// The fresh buffer is empty. Returns [`StageError::EmptyArena`] if the
    /// arena has zero length.
    pub fn new(arena: &'a mut [u8]) -> Result<Self, StageError> {
        if arena.is_empty() {
            return Err(StageError::EmptyArena);
        }

        Ok(Self {
            arena,
            head: 0,
            tail: 0,
            full: false,
        })
    }

    /// Empties the buffer.
    ///
    /// Sets `head = tail = 0` and clears the full flag. Idempotent and
    /// independent of prior state; stored bytes are simply forgotten.
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.full = false;
    }

    /// Returns the fixed arena size.
    pub fn capacity(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of bytes currently stored.
    pub fn len(&self) -> usize {
        if self.full {
            self.capacity()
        } else if self.head >= self.tail {
            self.head - self.tail
        } else {
            self.capacity() + self.head - self.tail
        }
    }

    /// Returns true if no bytes are stored.
    pub fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Returns the number of bytes that can still be pushed.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Pushes a single byte.
    ///
    /// Returns [`StageError::CapacityExceeded`] if the buffer is full; the
    /// buffer is left unchanged and no byte is overwritten.
    pub fn push(&mut self, byte: u8) -> Result<(), StageError> {
        if self.full {
            return Err(StageError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.arena[self.head] = byte;
        self.head = (self.head + 1) % self.capacity();
        self.full = self.head == self.tail;

        Ok(())
    }

    /// Pops the oldest byte.
    ///
    /// Returns [`StageError::Underflow`] if the buffer is empty; the buffer
    /// is left unchanged.
    pub fn pop(&mut self) -> Result<u8, StageError> {
        if self.is_empty() {
            return Err(StageError::Underflow);
        }

        let byte = self.arena[self.tail];
        self.full = false;
        self.tail = (self.tail + 1) % self.capacity();

        Ok(byte)
    }

    /// Pushes a slice of bytes in order, stopping at the first failure.
    ///
    /// **Not atomic**: if the buffer fills up part way through, the prefix
    /// that fit stays written and the call returns
    /// [`StageError::CapacityExceeded`]. Compare [`len`](Self::len) before
    /// and after to know how many bytes were consumed.
    ///
    /// ```
    /// use ringstage::RingBuffer;
    ///
    /// let mut arena = [0u8; 3];
    /// let mut buf = RingBuffer::new(&mut arena)?;
    ///
    /// assert!(buf.bulk_push(b"abcd").is_err());
    /// assert_eq!(buf.len(), 3); // "abc" made it in
    /// # Ok::<(), ringstage::StageError>(())
    /// ```
    pub fn bulk_push(&mut self, bytes: &[u8]) -> Result<(), StageError> {
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Pops bytes into `dest` until it is filled or the buffer runs dry.
    ///
    /// Returns the number of bytes written, which may be less than
    /// `dest.len()`.
    pub fn bulk_pop(&mut self, dest: &mut [u8]) -> usize {
        let mut written = 0;

        while written < dest.len() {
            let Ok(byte) = self.pop() else { break };
            dest[written] = byte;
            written += 1;
        }

        written
    }

    /// Drains up to `count` bytes into an owned [`Bytes`].
    ///
    /// This is the shape a staging layer hands to application logic after a
    /// read completes. An empty buffer yields an empty `Bytes`.
    pub fn pop_bytes(&mut self, count: usize) -> Bytes {
        let take = count.min(self.len());
        let mut out = Vec::with_capacity(take);

        while out.len() < take {
            let Ok(byte) = self.pop() else { break };
            out.push(byte);
        }

        Bytes::from(out)
    }
}
