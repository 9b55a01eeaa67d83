// Integration tests for the RingBuffer staging API
// Tests cover: fill/drain invariants, failure no-ops, FIFO law, bulk
// transfer semantics, reset behavior

use ringstage::{RingBuffer, StageError};

// ============================================================================
// Fill Invariants
// ============================================================================

#[test]
fn test_fill_invariants_hold_at_every_count() {
    let capacity = 16;
    let mut arena = vec![0u8; capacity];
    let mut buf = RingBuffer::new(&mut arena).unwrap();

    assert!(buf.is_empty(), "Fresh buffer must be empty");

    for n in 1..=capacity {
        buf.push(n as u8).unwrap();
        assert_eq!(buf.len(), n, "len must track push count");
        assert!(!buf.is_empty(), "Buffer with {} bytes is not empty", n);
        assert_eq!(
            buf.is_full(),
            n == capacity,
            "is_full must flip only at capacity"
        );
    }
}

#[test]
fn test_capacity_is_fixed() {
    let mut arena = [0u8; 32];
    let mut buf = RingBuffer::new(&mut arena).unwrap();

    assert_eq!(buf.capacity(), 32);
    buf.bulk_push(&[1, 2, 3]).unwrap();
    assert_eq!(buf.capacity(), 32, "capacity must not move with contents");
    assert_eq!(buf.remaining(), 29);
}

// ============================================================================
// Failure No-ops
// ============================================================================

#[test]
fn test_push_into_full_buffer_changes_nothing() {
    let mut arena = [0u8; 4];
    let mut buf = RingBuffer::new(&mut arena).unwrap();
    buf.bulk_push(&[10, 20, 30, 40]).unwrap();

    let err = buf.push(50).unwrap_err();
    assert_eq!(err, StageError::CapacityExceeded { capacity: 4 });
    assert_eq!(buf.len(), 4, "Failed push must not change size");
    assert!(buf.is_full(), "Failed push must not clear full flag");

    let mut dest = [0u8; 4];
    buf.bulk_pop(&mut dest);
    assert_eq!(dest, [10, 20, 30, 40], "Failed push must not touch contents");
}

#[test]
fn test_pop_from_empty_buffer_changes_nothing() {
    let mut arena = [0u8; 4];
    let mut buf = RingBuffer::new(&mut arena).unwrap();

    assert_eq!(buf.pop(), Err(StageError::Underflow));
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);

    // Buffer must still behave normally afterward
    buf.push(1).unwrap();
    assert_eq!(buf.pop(), Ok(1));
}

// ============================================================================
// FIFO Law
// ============================================================================

#[test]
fn test_popped_sequence_equals_pushed_sequence() {
    let mut arena = [0u8; 64];
    let mut buf = RingBuffer::new(&mut arena).unwrap();

    let pushed: Vec<u8> = (0..64).collect();
    buf.bulk_push(&pushed).unwrap();

    let mut popped = vec![0u8; 64];
    assert_eq!(buf.bulk_pop(&mut popped), 64);
    assert_eq!(popped, pushed, "FIFO order must be preserved");
}

#[test]
fn test_fifo_survives_interleaved_wraparound() {
    let mut arena = [0u8; 8];
    let mut buf = RingBuffer::new(&mut arena).unwrap();

    // Interleave pushes and pops so indices lap the arena several times
    let mut expected = Vec::new();
    let mut observed = Vec::new();
    let mut next = 0u8;

    for round in 0..10 {
        let burst = 3 + (round % 4);
        for _ in 0..burst {
            if buf.push(next).is_ok() {
                expected.push(next);
            }
            next = next.wrapping_add(1);
        }
        for _ in 0..2 {
            if let Ok(byte) = buf.pop() {
                observed.push(byte);
            }
        }
    }
    while let Ok(byte) = buf.pop() {
        observed.push(byte);
    }

    assert_eq!(observed, expected, "Wraparound must not reorder bytes");
}

// ============================================================================
// Bulk Transfer Semantics
// ============================================================================

#[test]
fn test_partial_bulk_push_writes_exactly_remaining() {
    let mut arena = [0u8; 8];
    let mut buf = RingBuffer::new(&mut arena).unwrap();
    buf.bulk_push(&[0xAA; 5]).unwrap();

    let before = buf.len();
    let payload = [0xBB; 7]; // only 3 slots remain
    let err = buf.bulk_push(&payload).unwrap_err();

    assert_eq!(err, StageError::CapacityExceeded { capacity: 8 });
    assert_eq!(
        buf.len(),
        before + 3,
        "The prefix that fit must stay written"
    );
    assert!(buf.is_full());

    // And the prefix must be the first 3 payload bytes, in order
    let mut dest = [0u8; 8];
    buf.bulk_pop(&mut dest);
    assert_eq!(&dest[5..], &[0xBB, 0xBB, 0xBB]);
}

#[test]
fn test_bulk_pop_returns_count_written() {
    let mut arena = [0u8; 16];
    let mut buf = RingBuffer::new(&mut arena).unwrap();
    buf.bulk_push(b"hello").unwrap();

    let mut small = [0u8; 3];
    assert_eq!(buf.bulk_pop(&mut small), 3, "Limited by destination");
    assert_eq!(&small, b"hel");

    let mut large = [0u8; 10];
    assert_eq!(buf.bulk_pop(&mut large), 2, "Limited by stored bytes");
    assert_eq!(&large[..2], b"lo");
}

#[test]
fn test_pop_bytes_hands_off_owned_data() {
    let mut arena = [0u8; 16];
    let mut buf = RingBuffer::new(&mut arena).unwrap();
    buf.bulk_push(b"request body").unwrap();

    let chunk = buf.pop_bytes(7);
    assert_eq!(&chunk[..], b"request");
    assert_eq!(buf.len(), 5, "Remaining bytes stay staged");

    let rest = buf.pop_bytes(100);
    assert_eq!(&rest[..], b" body");
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_always_yields_empty() {
    let mut arena = [0u8; 4];
    let mut buf = RingBuffer::new(&mut arena).unwrap();

    // From full
    buf.bulk_push(&[1, 2, 3, 4]).unwrap();
    buf.reset();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);

    // From mid-wrap state
    buf.bulk_push(&[5, 6, 7]).unwrap();
    buf.pop().unwrap();
    buf.reset();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);

    // From already-empty
    buf.reset();
    assert!(buf.is_empty());
}

// ============================================================================
// Concrete Scenario (capacity 4)
// ============================================================================

#[test]
fn test_capacity_four_scenario() {
    let mut arena = [0u8; 4];
    let mut buf = RingBuffer::new(&mut arena).unwrap();

    buf.bulk_push(b"ABCD").unwrap();
    assert!(buf.is_full(), "Four pushes must fill a capacity-4 buffer");

    assert!(buf.push(b'E').is_err(), "Fifth push must fail");

    assert_eq!(buf.pop(), Ok(b'A'), "First pop yields the oldest byte");
    assert!(!buf.is_full(), "Pop must clear the full flag");
    assert_eq!(buf.len(), 3);

    buf.push(b'E').unwrap();

    let mut dest = [0u8; 3];
    assert_eq!(buf.bulk_pop(&mut dest), 3);
    assert_eq!(&dest, b"BCD");
    assert_eq!(buf.pop(), Ok(b'E'));
    assert!(buf.is_empty());
}
