//! Grouped tables built from a regime's snapshot history.
//!
//! Every table is sorted by its group key: step first, then agent type, then
//! ethnicity, each in label order. Groups with no snapshots produce no row.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tenure_types::{AgentSnapshot, AgentType, Ethnicity};

/// Number of households per `(step, agent type, ethnicity)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Step index.
    pub step: u64,
    /// Classification.
    pub agent_type: AgentType,
    /// Ethnicity.
    pub ethnicity: Ethnicity,
    /// Households in the group.
    pub count: u32,
}

/// Mean wealth and mean house count per `(step, agent type)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WealthRow {
    /// Step index.
    pub step: u64,
    /// Classification.
    pub agent_type: AgentType,
    /// Mean wealth, rounded to 2 decimals.
    pub wealth: f64,
    /// Mean number of houses held, rounded to 2 decimals.
    pub num_houses: f64,
}

/// Summary counts reshaped to one row per step and one column per type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotTable {
    /// Agent types that occur anywhere in the input, in label order.
    pub columns: Vec<AgentType>,
    /// One row per step, in step order.
    pub rows: Vec<PivotRow>,
}

/// One step of a [`PivotTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    /// Step index.
    pub step: u64,
    /// One value per entry of [`PivotTable::columns`].
    pub values: Vec<f64>,
}

impl PivotTable {
    /// Value for `agent_type` at `step`, if both are present.
    pub fn value(&self, step: u64, agent_type: AgentType) -> Option<f64> {
        let column = self.columns.iter().position(|&c| c == agent_type)?;
        self.rows
            .iter()
            .find(|row| row.step == step)
            .and_then(|row| row.values.get(column).copied())
    }
}

/// Round to 2 decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Count households per `(step, agent type, ethnicity)`.
pub fn summary_stats(snapshots: &[AgentSnapshot]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(u64, AgentType, Ethnicity), u32> = BTreeMap::new();
    for snapshot in snapshots {
        let count = groups
            .entry((snapshot.step, snapshot.agent_type, snapshot.ethnicity))
            .or_insert(0);
        *count = count.saturating_add(1);
    }

    groups
        .into_iter()
        .map(|((step, agent_type, ethnicity), count)| SummaryRow {
            step,
            agent_type,
            ethnicity,
            count,
        })
        .collect()
}

#[derive(Default)]
struct Accumulator {
    total: f64,
    secondary: f64,
    count: u32,
}

impl Accumulator {
    const fn add(&mut self, total: f64, secondary: f64) {
        self.total += total;
        self.secondary += secondary;
        self.count = self.count.saturating_add(1);
    }

    fn means(&self) -> (f64, f64) {
        let n = f64::from(self.count);
        (self.total / n, self.secondary / n)
    }
}

/// Mean wealth and mean house count per `(step, agent type)`, both rounded
/// to 2 decimals.
pub fn wealth_report(snapshots: &[AgentSnapshot]) -> Vec<WealthRow> {
    let mut groups: BTreeMap<(u64, AgentType), Accumulator> = BTreeMap::new();
    for snapshot in snapshots {
        groups
            .entry((snapshot.step, snapshot.agent_type))
            .or_default()
            .add(snapshot.wealth, f64::from(snapshot.num_houses));
    }

    groups
        .into_iter()
        .map(|((step, agent_type), acc)| {
            let (wealth, num_houses) = acc.means();
            WealthRow {
                step,
                agent_type,
                wealth: round2(wealth),
                num_houses: round2(num_houses),
            }
        })
        .collect()
}

/// Pivot summary counts to steps by agent type.
///
/// Each cell is the mean `count` over the ethnicity rows present for that
/// step and type. A type absent at some step gets 0 there.
pub fn pivot_counts(summary: &[SummaryRow]) -> PivotTable {
    let columns: Vec<AgentType> = summary
        .iter()
        .map(|row| row.agent_type)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells: BTreeMap<u64, BTreeMap<AgentType, Accumulator>> = BTreeMap::new();
    for row in summary {
        cells
            .entry(row.step)
            .or_default()
            .entry(row.agent_type)
            .or_default()
            .add(f64::from(row.count), 0.0);
    }

    let rows = cells
        .into_iter()
        .map(|(step, by_type)| PivotRow {
            step,
            values: columns
                .iter()
                .map(|agent_type| by_type.get(agent_type).map_or(0.0, |acc| acc.means().0))
                .collect(),
        })
        .collect();

    PivotTable { columns, rows }
}
