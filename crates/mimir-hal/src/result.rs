//! Execution results and measurement outcome counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Measurement outcome counts.
///
/// Maps a measured bitstring to the number of shots that produced it. A
/// bitstring is the classical-register value rendered in binary, most
/// significant classical bit leftmost, with a fixed width equal to the
/// number of measured bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self(FxHashMap::default())
    }

    /// Record `n` occurrences of a bitstring.
    pub fn record(&mut self, bitstring: impl Into<String>, n: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += n;
    }

    /// Get the count for a bitstring (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total_shots(&self) -> u64 {
        self.0.values().sum()
    }

    /// The most frequent outcome, if any.
    ///
    /// Ties break toward the lexicographically smaller bitstring so the
    /// answer is deterministic.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by(|(sa, ca), (sb, cb)| ca.cmp(cb).then_with(|| sb.cmp(sa)))
            .map(|(s, c)| (s.as_str(), *c))
    }

    /// Outcomes sorted by descending count (ties by bitstring).
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.0.iter().map(|(s, c)| (s.as_str(), *c)).collect();
        entries.sort_by(|(sa, ca), (sb, cb)| cb.cmp(ca).then_with(|| sa.cmp(sb)));
        entries
    }

    /// Observed probability of a bitstring.
    pub fn probability(&self, bitstring: &str) -> f64 {
        let total = self.total_shots();
        if total == 0 {
            return 0.0;
        }
        self.get(bitstring) as f64 / total as f64
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(s, c)| (s.as_str(), *c))
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, n) in iter {
            counts.record(bitstring, n);
        }
        counts
    }
}

/// The result of executing a circuit on a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement outcome counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if the backend reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }

    /// Check that recorded counts add up to the requested shot count.
    pub fn verify_shot_total(&self) -> HalResult<()> {
        let total = self.counts.total_shots();
        if total != u64::from(self.shots) {
            return Err(HalError::Backend(format!(
                "counts total {} does not match shot count {}",
                total, self.shots
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut counts = Counts::new();
        counts.record("00", 1);
        counts.record("00", 2);
        counts.record("11", 5);

        assert_eq!(counts.get("00"), 3);
        assert_eq!(counts.get("11"), 5);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.total_shots(), 8);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_most_frequent() {
        let mut counts = Counts::new();
        counts.record("010", 700);
        counts.record("011", 200);
        counts.record("000", 100);

        assert_eq!(counts.most_frequent(), Some(("010", 700)));
    }

    #[test]
    fn test_most_frequent_tie_breaks_deterministically() {
        let mut counts = Counts::new();
        counts.record("10", 4);
        counts.record("01", 4);
        assert_eq!(counts.most_frequent(), Some(("01", 4)));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(Counts::new().most_frequent(), None);
    }

    #[test]
    fn test_sorted() {
        let mut counts = Counts::new();
        counts.record("00", 10);
        counts.record("01", 30);
        counts.record("10", 20);

        let sorted = counts.sorted();
        assert_eq!(sorted, vec![("01", 30), ("10", 20), ("00", 10)]);
    }

    #[test]
    fn test_probability() {
        let mut counts = Counts::new();
        counts.record("0", 250);
        counts.record("1", 750);

        assert!((counts.probability("1") - 0.75).abs() < f64::EPSILON);
        assert!((counts.probability("0") - 0.25).abs() < f64::EPSILON);
        assert_eq!(Counts::new().probability("0"), 0.0);
    }

    #[test]
    fn test_execution_result_shot_total() {
        let mut counts = Counts::new();
        counts.record("00", 600);
        counts.record("11", 424);

        let result = ExecutionResult::new(counts, 1024).with_execution_time(3);
        result.verify_shot_total().unwrap();
        assert_eq!(result.execution_time_ms, Some(3));

        let bad = ExecutionResult::new(Counts::new(), 1024);
        assert!(bad.verify_shot_total().is_err());
    }

    #[test]
    fn test_counts_serde_round_trip() {
        let mut counts = Counts::new();
        counts.record("101", 12);
        counts.record("010", 4);

        let json = serde_json::to_string(&counts).unwrap();
        let back: Counts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
