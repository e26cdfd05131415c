//! Batch distribution for parallel odds estimation.
//!
//! The estimator seeds every battle independently, so the iteration space can
//! be split into arbitrary contiguous ranges without changing results. This
//! module provides the range splitting and the worker-pool glue.

use crate::battle::ForceCount;
use crate::odds::{estimate_odds_parallel, OddsEstimate};
use crate::parallel::pool::WorkerPool;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use skirmish::parallel::batch_ranges;
/// let ranges = batch_ranges(10, 4);
/// assert_eq!(ranges, vec![(0, 3), (3, 6), (6, 8), (8, 10)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for batch in 0..num_batches {
        let size = base + usize::from(batch < remainder);
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run parallel odds estimation on `pool`'s workers. Convenience wrapper over
/// [estimate_odds_parallel] for callers that pin a worker count (e.g. from
/// `SKIRMISH_WORKERS`).
pub fn run_odds_batches(
    forces: ForceCount,
    battles: u32,
    seed: u64,
    pool: &WorkerPool,
) -> OddsEstimate {
    pool.install(|| estimate_odds_parallel(forces, battles, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_ranges_even_split() {
        let ranges = batch_ranges(12, 3);
        assert_eq!(ranges, vec![(0, 4), (4, 8), (8, 12)]);
    }

    #[test]
    fn batch_ranges_with_remainder_front_loads_extras() {
        let ranges = batch_ranges(11, 4);
        assert_eq!(ranges, vec![(0, 3), (3, 6), (6, 9), (9, 11)]);
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        let ranges = batch_ranges(2, 8);
        assert_eq!(ranges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert!(batch_ranges(0, 3).is_empty());
        assert!(batch_ranges(7, 0).is_empty());
    }

    #[test]
    fn batch_ranges_cover_the_whole_span() {
        let ranges = batch_ranges(97, 8);
        assert_eq!(ranges.first().map(|r| r.0), Some(0));
        assert_eq!(ranges.last().map(|r| r.1), Some(97));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
