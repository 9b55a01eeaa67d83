//! Bounded circular byte buffer for per-connection staging.
//!
//! - [`RingBuffer`] - FIFO byte queue over a borrowed fixed-size arena

mod buffer;

pub use buffer::RingBuffer;
