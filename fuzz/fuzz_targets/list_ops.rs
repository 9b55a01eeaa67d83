#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use ringstage::LinkedList;

// Drive the list with an op stream and check head/tail/len against a
// VecDeque model after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: LinkedList<u8> = LinkedList::new();
    let mut model: VecDeque<u8> = VecDeque::new();

    let mut ops = data.iter().copied();
    while let Some(op) = ops.next() {
        match op % 6 {
            0 => {
                let value = ops.next().unwrap_or(0);
                list.push_front(value);
                model.push_front(value);
            }
            1 => {
                let value = ops.next().unwrap_or(0);
                list.push_back(value);
                model.push_back(value);
            }
            2 => {
                assert_eq!(list.pop_front(), model.pop_front());
            }
            3 => {
                let target = ops.next().unwrap_or(0);
                let removed = list.remove_first(|&v| v == target);
                let expected = model
                    .iter()
                    .position(|&v| v == target)
                    .and_then(|pos| model.remove(pos));
                assert_eq!(removed, expected);
            }
            4 => {
                let len = ops.next().unwrap_or(0) as usize % 8;
                let values: Vec<u8> = (&mut ops).take(len).collect();
                let mut other: LinkedList<u8> = values.iter().copied().collect();
                list.append(&mut other);
                assert!(other.is_empty());
                model.extend(values);
            }
            _ => {
                list.clear();
                model.clear();
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.is_empty(), model.is_empty());
        assert_eq!(list.front(), model.front());
        assert_eq!(list.back(), model.back());

        let traversal: Vec<u8> = list.iter().copied().collect();
        let expected: Vec<u8> = model.iter().copied().collect();
        assert_eq!(traversal, expected);
    }
});
