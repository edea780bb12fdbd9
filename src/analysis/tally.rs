//! Pattern frequency tallies
//!
//! One tally per track during analysis, one global tally per corpus run.
//! The global tally is an explicit accumulator: per-track tallies are
//! collected first and merged sequentially, so analysis itself never
//! shares mutable state.

use std::collections::HashMap;

use crate::analysis::result::{Pattern, PatternCount};

/// Occurrence counts keyed by pattern
#[derive(Debug, Clone, Default)]
pub struct PatternTally {
    counts: HashMap<Pattern, u64>,
}

impl PatternTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a pattern
    pub fn add(&mut self, pattern: Pattern) {
        *self.counts.entry(pattern).or_insert(0) += 1;
    }

    /// Number of distinct patterns
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total occurrences across all patterns
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// True when no pattern has been recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrences of one pattern
    pub fn count(&self, pattern: &Pattern) -> u64 {
        self.counts.get(pattern).copied().unwrap_or(0)
    }

    /// Add another tally's counts into this one
    ///
    /// Counts for keys present in both sum; merging is commutative, so the
    /// global result does not depend on merge order.
    pub fn merge(&mut self, other: &PatternTally) {
        for (pattern, count) in &other.counts {
            *self.counts.entry(pattern.clone()).or_insert(0) += count;
        }
    }

    /// The `k` most frequent patterns
    ///
    /// Sorted by count descending; equal counts break ties by ascending
    /// pattern value, making the ranking deterministic.
    pub fn top(&self, k: usize) -> Vec<PatternCount> {
        let mut ranked: Vec<PatternCount> = self
            .counts
            .iter()
            .map(|(pattern, &count)| PatternCount {
                pattern: pattern.clone(),
                count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pattern.cmp(&b.pattern)));
        ranked.truncate(k);
        ranked
    }
}
