//! Progress-observed elementwise execution
//!
//! Same contract as [`process`](super::core::ParallelEngine::process), plus
//! a monitor thread that polls a shared completion counter and reports
//! throughput on the console. The monitor runs inside the same worker
//! scope, so the call returns only after the workers and the monitor have
//! all finished, and the final 100% report is emitted exactly once, after
//! every element has been written.

use std::io::Write;
use std::mem;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};

use super::core::ParallelEngine;
use super::partition::partition_ranges;

/// How often the monitor thread samples the completion counter.
const MONITOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl<T> ParallelEngine<T>
where
    T: Clone + Send + Sync,
{
    /// [`process`] with live progress reporting as a side effect.
    ///
    /// Each worker increments a shared atomic counter after writing each
    /// element. A monitor thread polls the counter every 100 ms and prints
    /// `completed/total`, percentage, and elapsed time under the engine's
    /// console lock, ending with a final 100% line once every element is
    /// done. The returned sequence is identical to what [`process`] would
    /// produce.
    ///
    /// [`process`]: ParallelEngine::process
    pub fn process_with_progress<F>(&self, transform: F) -> Result<Vec<T>>
    where
        F: Fn(&T) -> T + Sync,
    {
        let total = self.data.len();
        let ranges = partition_ranges(total, self.thread_count);
        let completed = AtomicUsize::new(0);
        let started = Instant::now();
        tracing::debug!(
            "process_with_progress: {} items across {} workers",
            total,
            ranges.len()
        );

        let mut result = self.data.clone();
        crossbeam::thread::scope(|s| {
            let transform = &transform;
            let completed = &completed;
            let mut rest: &mut [T] = &mut result;
            for range in &ranges {
                let (chunk, tail) = mem::take(&mut rest).split_at_mut(range.len());
                rest = tail;
                let source = &self.data[range.start..range.end];
                s.spawn(move |_| {
                    for (slot, item) in chunk.iter_mut().zip(source) {
                        *slot = transform(item);
                        completed.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }

            // The monitor joins at scope exit like any other worker.
            s.spawn(move |_| self.monitor_progress(completed, total, started));
        })
        .map_err(|_| anyhow!("worker thread panicked during process_with_progress"))?;

        Ok(result)
    }

    /// Poll the completion counter until every element is accounted for.
    fn monitor_progress(&self, completed: &AtomicUsize, total: usize, started: Instant) {
        while completed.load(Ordering::Relaxed) < total {
            std::thread::sleep(MONITOR_POLL_INTERVAL);

            let current = completed.load(Ordering::Relaxed);
            let elapsed = started.elapsed().as_millis();
            let _console = self
                .console_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            print!(
                "\r⚡ Progress: {}/{} ({:.1}%) - {} ms elapsed",
                current,
                total,
                completion_percent(current, total),
                elapsed
            );
            std::io::stdout().flush().ok();
        }

        let elapsed = started.elapsed().as_millis();
        let _console = self
            .console_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        println!("\r✔ Processed {total}/{total} (100.0%) in {elapsed} ms");
    }
}

/// Completion percentage; an empty workload counts as complete.
fn completion_percent(current: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        current as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_plain_process_output() {
        let data: Vec<i32> = (0..500).collect();
        let engine = ParallelEngine::with_threads(data, 4);
        let plain = engine.process(|x| x + 7).unwrap();
        let observed = engine.process_with_progress(|x| x + 7).unwrap();
        assert_eq!(plain, observed);
    }

    #[test]
    fn empty_dataset_completes_without_dividing_by_zero() {
        let engine = ParallelEngine::with_threads(Vec::<i32>::new(), 4);
        let result = engine.process_with_progress(|x| *x).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn single_element_dataset() {
        let engine = ParallelEngine::with_threads(vec![41], 2);
        assert_eq!(engine.process_with_progress(|x| x + 1).unwrap(), vec![42]);
    }

    #[test]
    fn percent_guards_empty_totals() {
        assert_eq!(completion_percent(0, 0), 100.0);
        assert_eq!(completion_percent(5, 10), 50.0);
        assert_eq!(completion_percent(10, 10), 100.0);
    }
}
