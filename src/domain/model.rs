use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One labeled test record: reach `target` by summing `denominations`
/// with repetition. Denominations keep caller order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub label: String,
    pub target: i64,
    pub denominations: Vec<i64>,
}

/// A multiset of denominations, materialized in generation order.
pub type Combination = Vec<i64>;

/// Outcome of one exhaustive search. `witness` is present iff `found`
/// and is the first combination in generation order whose sum matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub witness: Option<Combination>,
    pub elapsed: Duration,
}

/// The two input streams after parsing.
#[derive(Debug, Clone, Default)]
pub struct CaseBatch {
    pub tests: Vec<Case>,
    pub guaranteed_fails: Vec<Case>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingPoint {
    pub target: i64,
    pub elapsed_secs: f64,
}

/// Per-run accumulator of (target, elapsed) pairs. Owned by a single
/// run and handed to the reporter at the end, never shared state.
#[derive(Debug, Clone, Default)]
pub struct TimingSeries {
    points: Vec<TimingPoint>,
}

impl TimingSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: i64, elapsed_secs: f64) {
        self.points.push(TimingPoint {
            target,
            elapsed_secs,
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TimingPoint] {
        &self.points
    }

    /// Points ordered by target for plotting; insertion order breaks ties.
    pub fn sorted_by_target(&self) -> Vec<TimingPoint> {
        let mut sorted = self.points.clone();
        sorted.sort_by_key(|p| p.target);
        sorted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub test_cases: usize,
    pub guaranteed_fail_cases: usize,
    pub successes: usize,
    pub failures: usize,
    pub total_elapsed_secs: f64,
}

/// Everything the reporter needs, produced once per run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub case_log: String,
    pub successes: TimingSeries,
    pub failures: TimingSeries,
    pub summary: RunSummary,
}
