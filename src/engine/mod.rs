//! Parallel in-memory bulk-processing engine
//!
//! [`ParallelEngine`] owns a dataset and a fixed worker count and offers
//! functional-style bulk operations over it: [`process`]/[`map`],
//! [`process_with_progress`], [`filter`], [`reduce`], and an in-place
//! [`parallel_sort`].
//!
//! # Execution model
//!
//! Every operation computes a fresh partition plan (one contiguous index
//! range per worker), spawns its own batch of scoped threads, and joins
//! them all before returning. No thread outlives its call and nothing is
//! pooled across calls. Workers share no mutable state except what each
//! operation makes explicit: the atomic completion counter in
//! [`process_with_progress`] and the single merge lock in [`filter`].
//!
//! # Example
//!
//! ```rust
//! use datamill::engine::ParallelEngine;
//!
//! let engine = ParallelEngine::with_threads(vec![1, 2, 3, 4, 5, 6], 3);
//! let doubled = engine.map(|x| x * 2)?;
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10, 12]);
//!
//! let total = engine.reduce(|a, b| a + b, 0)?;
//! assert_eq!(total, 21);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! [`process`]: ParallelEngine::process
//! [`map`]: ParallelEngine::map
//! [`process_with_progress`]: ParallelEngine::process_with_progress
//! [`filter`]: ParallelEngine::filter
//! [`reduce`]: ParallelEngine::reduce
//! [`parallel_sort`]: ParallelEngine::parallel_sort

mod bulk;
mod core;
pub mod partition;
mod progress;
mod sort;

pub use self::core::{ParallelEngine, resolve_thread_count};
