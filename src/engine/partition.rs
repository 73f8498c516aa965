//! Index-range partitioning for worker distribution
//!
//! Every engine operation splits the dataset into one contiguous range per
//! worker. The math lives here so that map, filter, reduce, and sort all
//! agree on partition boundaries.

use std::ops::Range;

/// Split `[0, len)` into exactly `parts` contiguous half-open ranges.
///
/// Every range but the last has length `len / parts`; the last range absorbs
/// the remainder, so the ranges always cover `[0, len)` with no gaps or
/// overlaps. Total over `len >= 0` and `parts >= 1` — with `len == 0` every
/// range is empty, and with `len < parts` all but the last are empty.
pub fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    debug_assert!(parts >= 1, "partition count must be positive");

    let chunk = len / parts;
    (0..parts)
        .map(|i| {
            let start = i * chunk;
            let end = if i == parts - 1 { len } else { start + chunk };
            start..end
        })
        .collect()
}
