//! Singly linked list with head/tail tracking for connection registries.
//!
//! - [`LinkedList`] - index-linked list with O(1) front/back insertion and
//!   predicate-driven removal

mod chain;

pub use chain::{Drain, IntoIter, Iter, LinkedList};
