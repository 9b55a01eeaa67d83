#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use ringstage::RingBuffer;

// Interpret the input as an op stream and check the buffer against a
// VecDeque model byte for byte.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };
    let capacity = 1 + (cap_byte as usize % 64);

    let mut arena = vec![0u8; capacity];
    let mut buf = RingBuffer::new(&mut arena).unwrap();
    let mut model: VecDeque<u8> = VecDeque::new();

    let mut ops = ops.iter().copied();
    while let Some(op) = ops.next() {
        match op % 5 {
            0 => {
                let byte = ops.next().unwrap_or(0);
                let pushed = buf.push(byte).is_ok();
                assert_eq!(pushed, model.len() < capacity);
                if pushed {
                    model.push_back(byte);
                }
            }
            1 => {
                let popped = buf.pop().ok();
                assert_eq!(popped, model.pop_front());
            }
            2 => {
                let len = ops.next().unwrap_or(0) as usize % 16;
                let payload: Vec<u8> = (&mut ops).take(len).collect();
                let fits = model.len() + payload.len() <= capacity;
                assert_eq!(buf.bulk_push(&payload).is_ok(), fits);
                // Partial writes keep the prefix that fit
                let room = capacity - model.len();
                model.extend(payload.into_iter().take(room));
            }
            3 => {
                let len = ops.next().unwrap_or(0) as usize % 16;
                let mut dest = vec![0u8; len];
                let n = buf.bulk_pop(&mut dest);
                assert_eq!(n, len.min(model.len()));
                for byte in dest.into_iter().take(n) {
                    assert_eq!(Some(byte), model.pop_front());
                }
            }
            _ => {
                buf.reset();
                model.clear();
            }
        }

        assert_eq!(buf.len(), model.len());
        assert_eq!(buf.is_empty(), model.is_empty());
        assert_eq!(buf.is_full(), model.len() == capacity);
        assert_eq!(buf.capacity(), capacity);
    }

    // Drain and compare final contents
    let mut dest = vec![0u8; capacity];
    let n = buf.bulk_pop(&mut dest);
    assert_eq!(n, model.len());
    let drained: Vec<u8> = model.into_iter().collect();
    assert_eq!(&dest[..n], &drained[..]);
});
