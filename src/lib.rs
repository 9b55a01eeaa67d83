//! ringstage
//!
//! Bounded staging containers for connection-oriented servers.
//!
//! `ringstage` provides the two containers an event-driven server keeps
//! around: a [`RingBuffer`] that stages bytes between a socket and the
//! application (one per connection), and a [`LinkedList`] that tracks
//! connected client records (one per server). Both are pure data structures:
//!
//! - no I/O
//! - no threads or locks
//! - no wire protocol assumptions
//!
//! They only do one thing each: **bytes in → bytes out, in order** and
//! **records in → records out, by predicate**.
//!
//! # Staging bytes
//!
//! ```
//! use ringstage::RingBuffer;
//!
//! fn main() -> Result<(), ringstage::StageError> {
//!     let mut arena = [0u8; 256];
//!     let mut inbound = RingBuffer::new(&mut arena)?;
//!
//!     inbound.bulk_push(b"GET /ping")?;
//!     let request = inbound.pop_bytes(9);
//!     assert_eq!(&request[..], b"GET /ping");
//!     Ok(())
//! }
//! ```
//!
//! # Tracking clients
//!
//! ```
//! use ringstage::LinkedList;
//!
//! let mut clients = LinkedList::new();
//! clients.push_back(("127.0.0.1", 4));
//! clients.push_back(("10.0.0.2", 7));
//!
//! // Disconnect: unlink the record whose descriptor matches.
//! let gone = clients.remove_first(|&(_, fd)| fd == 4);
//! assert_eq!(gone, Some(("127.0.0.1", 4)));
//! assert_eq!(clients.len(), 1);
//! ```
//!
//! Neither container is internally thread-safe. A server sharing one
//! instance across workers must wrap it in external synchronization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod list;
mod ring;

//
// Public surface (intentionally tiny)
//

pub use error::StageError;
pub use list::{Drain, IntoIter, Iter, LinkedList};
pub use ring::RingBuffer;
