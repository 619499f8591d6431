//! Snapshot - the complete result of one polling cycle.

use serde::{Deserialize, Serialize};

use crate::ProbeOutcome;

/// An ordered set of probe outcomes, index-aligned 1:1 with the service
/// list that produced it.
///
/// A snapshot is built fresh every polling cycle and replaces the previous
/// one wholesale; individual outcomes are never mutated in place, so
/// readers always observe a consistent cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Unix timestamp in milliseconds when this cycle completed.
    pub taken_at_ms: u64,
    /// One outcome per configured service, in input order.
    pub outcomes: Vec<ProbeOutcome>,
}

impl HealthSnapshot {
    /// Create a snapshot with the current timestamp.
    pub fn new(outcomes: Vec<ProbeOutcome>) -> Self {
        Self {
            taken_at_ms: current_timestamp_ms(),
            outcomes,
        }
    }

    /// Create a snapshot with a specific timestamp.
    pub fn with_timestamp(taken_at_ms: u64, outcomes: Vec<ProbeOutcome>) -> Self {
        Self {
            taken_at_ms,
            outcomes,
        }
    }

    /// Number of services covered by this snapshot.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the snapshot covers no services.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcome for the service at `index` in the input list.
    pub fn get(&self, index: usize) -> Option<&ProbeOutcome> {
        self.outcomes.get(index)
    }

    /// Iterate over outcomes in input order.
    pub fn iter(&self) -> impl Iterator<Item = &ProbeOutcome> {
        self.outcomes.iter()
    }
}

impl Default for HealthSnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Get current timestamp in milliseconds since Unix epoch.
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
