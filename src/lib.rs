//! # Datamill - parallel in-memory bulk data processing
//!
//! Datamill applies functional-style bulk operations to an owned sequence
//! using a fixed batch of worker threads per call:
//!
//! - **Elementwise**: [`engine::ParallelEngine::process`] / `map`, with an
//!   optional progress-observed variant that reports throughput while the
//!   workers run
//! - **Filtering**: partition-local match buffers merged under one lock
//! - **Reducing**: per-partition partial folds combined sequentially
//! - **Sorting**: parallel local sort plus a hierarchical merge that
//!   off-loads large sub-merges to asynchronous tasks
//!
//! Two standalone utilities ship alongside the engine: a named
//! [log-file manager](logfile::LogFileManager) writing timestamped lines,
//! and a fixed-capacity [ring buffer](ring::RingBuffer) with wraparound
//! indexing.
//!
//! ## Quick start
//!
//! ```rust
//! use datamill::engine::ParallelEngine;
//!
//! let mut engine = ParallelEngine::with_threads(vec![5, 3, 1, 4, 2], 2);
//! engine.parallel_sort()?;
//! assert_eq!(engine.data(), &[1, 2, 3, 4, 5]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod engine;
pub mod logfile;
pub mod ring;
