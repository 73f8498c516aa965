//! Elementwise, filtering, and reducing bulk operations
//!
//! Each operation partitions the dataset, spawns one scoped worker per
//! partition, and joins the whole batch before returning. Workers never
//! share mutable state except where a single lock (filter's merge) makes
//! the sharing explicit.

use std::mem;
use std::sync::{Mutex, PoisonError};

use anyhow::{Result, anyhow};

use super::core::ParallelEngine;
use super::partition::partition_ranges;

impl<T> ParallelEngine<T>
where
    T: Clone + Send + Sync,
{
    /// Apply a pure transform to every element in parallel.
    ///
    /// The output is pre-sized to the dataset length and each worker writes
    /// only its own partition's indices, so no synchronization is needed on
    /// the output itself. Guarantees `result[i] == transform(&data[i])` for
    /// every index, independent of the thread count.
    ///
    /// The transform must be safe to call concurrently on disjoint
    /// elements; shared mutable captured state races and is a caller
    /// contract violation.
    pub fn process<F>(&self, transform: F) -> Result<Vec<T>>
    where
        F: Fn(&T) -> T + Sync,
    {
        let ranges = partition_ranges(self.data.len(), self.thread_count);
        tracing::debug!(
            "process: {} items across {} workers",
            self.data.len(),
            ranges.len()
        );

        let mut result = self.data.clone();
        crossbeam::thread::scope(|s| {
            let transform = &transform;
            // Hand each worker a disjoint &mut sub-view of the output.
            let mut rest: &mut [T] = &mut result;
            for range in &ranges {
                let (chunk, tail) = mem::take(&mut rest).split_at_mut(range.len());
                rest = tail;
                let source = &self.data[range.start..range.end];
                s.spawn(move |_| {
                    for (slot, item) in chunk.iter_mut().zip(source) {
                        *slot = transform(item);
                    }
                });
            }
        })
        .map_err(|_| anyhow!("worker thread panicked during process"))?;

        Ok(result)
    }

    /// Alias of [`process`](ParallelEngine::process).
    pub fn map<F>(&self, transform: F) -> Result<Vec<T>>
    where
        F: Fn(&T) -> T + Sync,
    {
        self.process(transform)
    }

    /// Collect every element satisfying the predicate.
    ///
    /// Workers buffer matches locally and append them to the shared result
    /// in one batch per partition under a single lock, so the scan itself
    /// runs lock-free. The result equals `{x : predicate(x)}` as a
    /// multiset, but the cross-partition order depends on which worker
    /// acquires the merge lock first — it is intentionally
    /// non-deterministic. Compare results as multisets, not positionally.
    pub fn filter<P>(&self, predicate: P) -> Result<Vec<T>>
    where
        P: Fn(&T) -> bool + Sync,
    {
        let ranges = partition_ranges(self.data.len(), self.thread_count);
        let merged: Mutex<Vec<T>> = Mutex::new(Vec::new());

        crossbeam::thread::scope(|s| {
            let predicate = &predicate;
            let merged = &merged;
            for range in ranges {
                let source = &self.data[range];
                s.spawn(move |_| {
                    let mut local = Vec::new();
                    for item in source {
                        if predicate(item) {
                            local.push(item.clone());
                        }
                    }
                    let mut guard = merged.lock().unwrap_or_else(PoisonError::into_inner);
                    guard.extend(local);
                });
            }
        })
        .map_err(|_| anyhow!("worker thread panicked during filter"))?;

        Ok(merged.into_inner().unwrap_or_else(PoisonError::into_inner))
    }

    /// Fold the dataset with an associative combiner and identity value.
    ///
    /// Each worker folds its partition left-to-right into its own
    /// pre-seeded partial slot; the partials are then folded sequentially
    /// in partition order, starting again from `init`. For the two-phase
    /// fold to equal a single sequential fold, `combine` must be
    /// associative with `init` as a left identity — a caller obligation
    /// the engine does not check. An empty dataset yields `init`.
    pub fn reduce<G>(&self, combine: G, init: T) -> Result<T>
    where
        G: Fn(&T, &T) -> T + Sync,
    {
        let ranges = partition_ranges(self.data.len(), self.thread_count);
        let mut partials: Vec<T> = vec![init.clone(); self.thread_count];

        crossbeam::thread::scope(|s| {
            let combine = &combine;
            // One slot per partition; each worker writes only its own.
            let mut rest: &mut [T] = &mut partials;
            for range in ranges {
                let (slot, tail) = mem::take(&mut rest).split_at_mut(1);
                rest = tail;
                let source = &self.data[range];
                s.spawn(move |_| {
                    let mut acc = slot[0].clone();
                    for item in source {
                        acc = combine(&acc, item);
                    }
                    slot[0] = acc;
                });
            }
        })
        .map_err(|_| anyhow!("worker thread panicked during reduce"))?;

        Ok(partials
            .iter()
            .fold(init, |acc, partial| combine(&acc, partial)))
    }
}
