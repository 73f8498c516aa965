//! Fixed-capacity ring buffer
//!
//! [`RingBuffer`] keeps the most recent `capacity` elements pushed into it,
//! overwriting the oldest element on overflow. Indexing wraps around a
//! fixed slot array; iteration walks forward from the oldest element.

mod buffer;

pub use buffer::{RingBuffer, RingIter};
