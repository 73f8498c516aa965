//! Two-phase parallel merge sort
//!
//! Phase 1 sorts each partition in place, one worker per partition. Phase 2
//! recursively merges the whole index range with a scratch buffer,
//! off-loading sufficiently large sub-merges to a rayon task while the
//! calling thread recurses on the other half.

use std::mem;

use anyhow::{Result, anyhow};

use super::core::ParallelEngine;
use super::partition::partition_ranges;

/// Sub-merges longer than this run their left half on a separate task;
/// below it the task-spawn overhead dominates and recursion stays
/// synchronous.
const PARALLEL_MERGE_THRESHOLD: usize = 10_000;

impl<T> ParallelEngine<T>
where
    T: Ord + Clone + Send + Sync,
{
    /// Sort the dataset in place.
    ///
    /// After this returns the dataset is non-decreasing under `T::Ord`, for
    /// any dataset length and thread count, and sorting again is a no-op on
    /// the values. Equal elements may be reordered (the sort is not
    /// stable).
    pub fn parallel_sort(&mut self) -> Result<()> {
        let total = self.data.len();
        if total <= 1 {
            return Ok(());
        }

        let ranges = partition_ranges(total, self.thread_count);
        tracing::debug!(
            "parallel_sort: {} items, {} local-sort workers",
            total,
            ranges.len()
        );

        // Phase 1: each partition is sorted independently.
        crossbeam::thread::scope(|s| {
            let mut rest: &mut [T] = &mut self.data;
            for range in &ranges {
                let (chunk, tail) = mem::take(&mut rest).split_at_mut(range.len());
                rest = tail;
                s.spawn(move |_| chunk.sort_unstable());
            }
        })
        .map_err(|_| anyhow!("worker thread panicked during parallel_sort"))?;

        // Phase 2: hierarchical merge over the full range. The recursion
        // splits at midpoints, not at the partition boundaries, so uneven
        // partition lengths from phase 1 do not affect correctness.
        let mut scratch = self.data.clone();
        merge_sorted_halves(&mut self.data, &mut scratch, self.thread_count);
        Ok(())
    }
}

/// Recursively sort `data` by merging its two halves through `scratch`.
///
/// The linear merge takes from the left half on ties, so runs that are
/// already sorted merge stably. Ranges of length <= 1 are the terminal
/// case.
fn merge_sorted_halves<T>(data: &mut [T], scratch: &mut [T], thread_count: usize)
where
    T: Ord + Clone + Send,
{
    let len = data.len();
    if len <= 1 {
        return;
    }
    let middle = len / 2;

    {
        let (data_lo, data_hi) = data.split_at_mut(middle);
        let (scratch_lo, scratch_hi) = scratch.split_at_mut(middle);
        if len > PARALLEL_MERGE_THRESHOLD && thread_count > 1 {
            rayon::join(
                || merge_sorted_halves(data_lo, scratch_lo, thread_count),
                || merge_sorted_halves(data_hi, scratch_hi, thread_count),
            );
        } else {
            merge_sorted_halves(data_lo, scratch_lo, thread_count);
            merge_sorted_halves(data_hi, scratch_hi, thread_count);
        }
    }

    // Linear merge into scratch, then copy back.
    let mut i = 0;
    let mut j = middle;
    for slot in scratch.iter_mut() {
        if j >= len || (i < middle && data[i] <= data[j]) {
            *slot = data[i].clone();
            i += 1;
        } else {
            *slot = data[j].clone();
            j += 1;
        }
    }
    data.clone_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted<T: Ord>(data: &[T]) {
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sorts_small_scenario() {
        let mut engine = ParallelEngine::with_threads(vec![5, 3, 1, 4, 2], 2);
        engine.parallel_sort().unwrap();
        assert_eq!(engine.data(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_and_single_element_are_noops() {
        let mut empty = ParallelEngine::with_threads(Vec::<i32>::new(), 4);
        empty.parallel_sort().unwrap();
        assert!(empty.is_empty());

        let mut single = ParallelEngine::with_threads(vec![9], 4);
        single.parallel_sort().unwrap();
        assert_eq!(single.data(), &[9]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut engine = ParallelEngine::with_threads(vec![4, 1, 3, 2, 5, 0], 3);
        engine.parallel_sort().unwrap();
        let first = engine.data().to_vec();
        engine.parallel_sort().unwrap();
        assert_eq!(engine.data(), first.as_slice());
    }

    #[test]
    fn reverse_input_above_async_threshold() {
        let data: Vec<i64> = (0..10_001).rev().collect();
        let mut engine = ParallelEngine::with_threads(data, 4);
        engine.parallel_sort().unwrap();
        assert_sorted(engine.data());
        assert_eq!(engine.data()[0], 0);
        assert_eq!(engine.data()[10_000], 10_000);
    }

    #[test]
    fn reverse_input_below_async_threshold() {
        let data: Vec<i64> = (0..9_999).rev().collect();
        let mut engine = ParallelEngine::with_threads(data, 4);
        engine.parallel_sort().unwrap();
        assert_sorted(engine.data());
    }

    #[test]
    fn single_thread_takes_synchronous_branch() {
        let data: Vec<i64> = (0..20_000).rev().collect();
        let mut engine = ParallelEngine::with_threads(data, 1);
        engine.parallel_sort().unwrap();
        assert_sorted(engine.data());
    }

    #[test]
    fn uneven_partitions_still_sort_fully() {
        // 7 threads over 100 elements leaves a long final partition.
        let data: Vec<i32> = (0..100).map(|x| (x * 37) % 100).collect();
        let mut engine = ParallelEngine::with_threads(data, 7);
        engine.parallel_sort().unwrap();
        let expected: Vec<i32> = {
            let mut v: Vec<i32> = (0..100).map(|x| (x * 37) % 100).collect();
            v.sort_unstable();
            v
        };
        assert_eq!(engine.data(), expected.as_slice());
    }
}
