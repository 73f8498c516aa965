//! Engine construction and thread-count policy

use std::sync::Mutex;

/// Parallel bulk-processing engine over an owned dataset.
///
/// The engine owns its data for its whole lifetime; only [`parallel_sort`]
/// mutates it in place. Each operation spawns its own batch of worker
/// threads and joins them before returning — there is no persistent pool
/// and no thread reuse across calls. The engine provides no cross-call
/// synchronization, so callers must not run two operations on the same
/// instance concurrently.
///
/// [`parallel_sort`]: ParallelEngine::parallel_sort
pub struct ParallelEngine<T> {
    pub(crate) data: Vec<T>,
    pub(crate) thread_count: usize,
    /// Serializes console status lines from the progress monitor against
    /// any other output the engine produces.
    pub(crate) console_lock: Mutex<()>,
}

impl<T> ParallelEngine<T> {
    /// Create an engine with an auto-detected thread count.
    pub fn new(data: Vec<T>) -> Self {
        Self::with_threads(data, 0)
    }

    /// Create an engine with an explicit thread count.
    ///
    /// A count of 0 is corrected to the auto-detected default rather than
    /// rejected; the resolved count is always at least 1.
    pub fn with_threads(data: Vec<T>, threads: usize) -> Self {
        let thread_count = resolve_thread_count(threads);
        tracing::debug!("engine created: {} items, {} threads", data.len(), thread_count);
        Self {
            data,
            thread_count,
            console_lock: Mutex::new(()),
        }
    }

    /// Number of worker threads each operation will spawn.
    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Borrow the dataset.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the engine and take the dataset back.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

/// Resolve a requested thread count, treating 0 as "auto-detect".
pub fn resolve_thread_count(requested: usize) -> usize {
    if requested > 0 {
        requested
    } else {
        std::cmp::max(1, num_cpus::get())
    }
}
