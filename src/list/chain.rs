//! The linked list - singly linked chain with head/tail tracking.
//!
//! A server keeps one of these for its connected client records: connects
//! append with `push_back`, disconnects unlink with `remove_first` and an
//! address- or descriptor-based predicate.
//!
//! Nodes live in an index-linked slot arena rather than behind per-node
//! heap pointers. Links are slot indices, freed slots are recycled through a
//! free list, and removal is an iterative previous/current walk, so chains
//! of any length cost O(1) stack. Every operation maintains `head`, `tail`,
//! and `len` together; no call can leave the tail pointing outside the
//! chain or the length out of sync with it.

use std::fmt;

/// One node: a payload and the index of its successor.
#[derive(Debug)]
struct Slot<T> {
    value: T,
    next: Option<usize>,
}

/// A singly linked list with head/tail tracking.
///
/// Front and back insertion are O(1); removal scans from the head and
/// unlinks the first match. The list owns its payloads: dropping or
/// [`clear`](Self::clear)ing the list drops them, while
/// [`drain`](Self::drain) and [`remove_first`](Self::remove_first) hand
/// them back to the caller intact. Store references, `Rc`s, or plain values
/// as `T` to get borrow, shared, or owned semantics; the type decides, not
/// a runtime flag.
///
/// # Concurrency
///
/// Not internally thread-safe. A registry shared across worker threads must
/// be wrapped in external synchronization.
///
/// # Example
///
/// ```
/// use ringstage::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
///
/// let order: Vec<_> = list.iter().copied().collect();
/// assert_eq!(order, [0, 1, 2]);
/// assert_eq!(list.len(), 3);
/// ```
pub struct LinkedList<T> {
    slots: Vec<Option<Slot<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first payload, if any.
    pub fn front(&self) -> Option<&T> {
        self.payload(self.head)
    }

    /// Returns a reference to the last payload, if any.
    pub fn back(&self) -> Option<&T> {
        self.payload(self.tail)
    }

    /// Prepends a value. O(1).
    ///
    /// On an empty list the new node becomes both head and tail.
    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(Slot {
            value,
            next: self.head,
        });

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
    }

    /// Appends a value using the tracked tail. O(1).
    ///
    /// On an empty list the new node becomes both head and tail.
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(Slot { value, next: None });

        match self.tail {
            Some(tail) => {
                if let Some(slot) = self.slots[tail].as_mut() {
                    slot.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the first payload, or `None` on an empty list.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        let slot = self.slots[idx].take()?;

        self.head = slot.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.free.push(idx);
        self.len -= 1;

        Some(slot.value)
    }

    /// Unlinks the first node whose payload matches the predicate and
    /// returns its payload.
    ///
    /// Walks the chain front to back with an explicit previous/current
    /// pair; the first match is spliced out, its slot recycled, and `len`
    /// and `tail` updated in the same call. Returns `None`, leaving the
    /// chain unchanged, when nothing matches.
    ///
    /// The predicate must be a deterministic equality test for the caller's
    /// notion of "the node to remove", since the walk stops at the first
    /// match. O(n) time, O(1) stack.
    ///
    /// # Example
    ///
    /// ```
    /// use ringstage::LinkedList;
    ///
    /// let mut list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(list.remove_first(|s| *s == "b"), Some("b"));
    ///
    /// let rest: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(rest, ["a", "c"]);
    /// ```
    pub fn remove_first<F>(&mut self, mut matches: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev: Option<usize> = None;
        let mut cur = self.head;

        while let Some(idx) = cur {
            let next = self.slots[idx].as_ref().and_then(|slot| slot.next);
            let hit = self.slots[idx]
                .as_ref()
                .is_some_and(|slot| matches(&slot.value));

            if hit {
                let slot = self.slots[idx].take()?;

                match prev {
                    Some(prev_idx) => {
                        if let Some(prev_slot) = self.slots[prev_idx].as_mut() {
                            prev_slot.next = slot.next;
                        }
                    }
                    None => self.head = slot.next,
                }
                if self.tail == Some(idx) {
                    self.tail = prev;
                }
                self.free.push(idx);
                self.len -= 1;

                return Some(slot.value);
            }

            prev = cur;
            cur = next;
        }

        None
    }

    /// Moves all nodes of `other` to the back of `self`, leaving `other`
    /// empty.
    ///
    /// This is the only way to splice whole chains: head, tail, and length
    /// of both lists stay consistent throughout. O(n) over `other`.
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Drops every node together with its payload.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Empties the list front to back, yielding each payload to the caller.
    ///
    /// The node bookkeeping is released as the iterator advances; the
    /// payloads survive in the caller's hands. Dropping the iterator early
    /// leaves the remaining nodes in the list.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { list: self }
    }

    /// Returns a front-to-back iterator over payload references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            cur: self.head,
            remaining: self.len,
        }
    }

    fn payload(&self, idx: Option<usize>) -> Option<&T> {
        self.slots[idx?].as_ref().map(|slot| &slot.value)
    }

    /// Places a slot into recycled or fresh storage, returning its index.
    fn alloc(&mut self, slot: Slot<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(slot);
                idx
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Front-to-back iterator over payload references.
///
/// Created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    slots: &'a [Option<Slot<T>>],
    cur: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let idx = self.cur?;
        let slot = self.slots[idx].as_ref()?;

        self.cur = slot.next;
        self.remaining -= 1;

        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning front-to-back iterator.
///
/// Created by [`LinkedList::into_iter`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// Draining front-to-back iterator.
///
/// Created by [`LinkedList::drain`].
pub struct Drain<'a, T> {
    list: &'a mut LinkedList<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
