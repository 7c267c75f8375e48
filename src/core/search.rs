use crate::domain::model::{Combination, SearchResult};
use std::time::Instant;

/// Lazy generator of combinations-with-replacement of `pool` taken `r`
/// at a time, in lexicographic order over the pool's *input* order.
/// Duplicate pool values yield duplicate combinations; the pool is
/// never sorted or deduplicated.
///
/// Finite and non-restartable: the search consumes it greedily and
/// drops it at the first match.
pub struct CombinationsWithReplacement<'a> {
    pool: &'a [i64],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a> CombinationsWithReplacement<'a> {
    pub fn new(pool: &'a [i64], r: usize) -> Self {
        Self {
            pool,
            indices: vec![0; r],
            started: false,
            done: pool.is_empty() && r > 0,
        }
    }

    fn current(&self) -> Combination {
        self.indices.iter().map(|&i| self.pool[i]).collect()
    }
}

impl Iterator for CombinationsWithReplacement<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        // Advance the rightmost slot that is not yet at the last pool
        // index, then reset everything to its right to the same index.
        match self.indices.iter().rposition(|&ix| ix + 1 != self.pool.len()) {
            Some(i) => {
                let bumped = self.indices[i] + 1;
                for slot in self.indices[i..].iter_mut() {
                    *slot = bumped;
                }
                Some(self.current())
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Exhaustively decide whether `target` is reachable as a sum of
/// `denominations` drawn with repetition.
///
/// Lengths are tried ascending from 1 to `target` inclusive, and within
/// a length every combination-with-replacement is generated in input
/// order; the first combination whose sum equals `target` wins. The
/// witness is therefore shortest-length first, generation-order first
/// within a length, and depends on the caller's denomination order.
///
/// Deliberately brute force: no memoization, no partial-sum pruning,
/// and the sum is always taken over the complete tuple. The exponential
/// cost in `target` is the quantity the timing exists to measure.
///
/// Never fails: an empty pool, an unreachable target, or `target <= 0`
/// (empty length range) all yield a not-found result.
pub fn search(target: i64, denominations: &[i64]) -> SearchResult {
    let start = Instant::now();

    for r in 1..=target {
        for combination in CombinationsWithReplacement::new(denominations, r as usize) {
            if combination.iter().sum::<i64>() == target {
                return SearchResult {
                    found: true,
                    witness: Some(combination),
                    elapsed: start.elapsed(),
                };
            }
        }
    }

    SearchResult {
        found: false,
        witness: None,
        elapsed: start.elapsed(),
    }
}
