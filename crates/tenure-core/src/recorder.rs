//! Per-step snapshot recording.
//!
//! After every step the market hands one [`AgentSnapshot`] per household to
//! a [`SnapshotSink`]. The [`DataCollector`] keeps them all in memory, in
//! the order received, so the driver can aggregate the full history once the
//! run ends.

use tenure_types::{AgentSnapshot, HouseholdId};

/// Receiver of per-step household snapshots.
pub trait SnapshotSink {
    /// Accept one snapshot. Called once per household per step.
    fn record(&mut self, snapshot: AgentSnapshot);
}

/// A sink that discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn record(&mut self, _snapshot: AgentSnapshot) {}
}

/// In-memory snapshot history for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataCollector {
    snapshots: Vec<AgentSnapshot>,
}

impl DataCollector {
    /// Create an empty collector.
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// All snapshots in recording order.
    pub fn snapshots(&self) -> &[AgentSnapshot] {
        &self.snapshots
    }

    /// Consume the collector and return the history.
    pub fn into_snapshots(self) -> Vec<AgentSnapshot> {
        self.snapshots
    }

    /// Number of snapshots recorded.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots recorded for `step`.
    pub fn at_step(&self, step: u64) -> impl Iterator<Item = &AgentSnapshot> {
        self.snapshots.iter().filter(move |s| s.step == step)
    }

    /// Snapshots recorded for one household, oldest first.
    pub fn for_agent(&self, agent_id: HouseholdId) -> impl Iterator<Item = &AgentSnapshot> {
        self.snapshots.iter().filter(move |s| s.agent_id == agent_id)
    }

    /// Highest step index recorded, if any.
    pub fn last_step(&self) -> Option<u64> {
        self.snapshots.iter().map(|s| s.step).max()
    }
}

impl SnapshotSink for DataCollector {
    fn record(&mut self, snapshot: AgentSnapshot) {
        self.snapshots.push(snapshot);
    }
}
