//! Parsed report and hierarchy navigation.
//!
//! Navigation walks `subcircuits` links by id and tolerates cycles.

use crate::model::{Circuit, CircuitId, DiffEntry, Summary};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of parsing one LVS comparison report
///
/// Either `ok` is true and `circuits` holds the pruned, re-indexed circuit
/// set, or `ok` is false, `error` explains why and the body is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Sum over all kept circuits' own summaries
    pub summary: Summary,
    pub circuits: Vec<Circuit>,
}

impl Report {
    /// A successful report over an already pruned and linked circuit set
    pub fn new(summary: Summary, circuits: Vec<Circuit>) -> Self {
        Self {
            ok: true,
            error: None,
            summary,
            circuits,
        }
    }

    /// A failed report carrying only the error message
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            summary: Summary::default(),
            circuits: Vec::new(),
        }
    }

    pub fn circuit(&self, id: CircuitId) -> Option<&Circuit> {
        self.circuits.get(id)
    }

    /// Circuits no other circuit links as a subcircuit, in report order
    pub fn top_level(&self) -> impl Iterator<Item = &Circuit> {
        self.circuits.iter().filter(|c| c.is_top_level)
    }

    /// Direct subcircuits of `id` with the device name they are linked by,
    /// ordered by device name
    pub fn children(&self, id: CircuitId) -> impl Iterator<Item = (&str, &Circuit)> {
        self.circuit(id)
            .into_iter()
            .flat_map(|c| c.subcircuits.iter())
            .filter_map(move |(name, child)| self.circuit(*child).map(|c| (name.as_str(), c)))
    }

    /// Ids of `id` and all of its descendants, pre-order
    ///
    /// Each circuit appears once even when it is reachable along several
    /// paths, and link cycles terminate.
    pub fn subtree(&self, id: CircuitId) -> Vec<CircuitId> {
        let mut order = Vec::new();
        if self.circuit(id).is_none() {
            return order;
        }
        let mut seen = HashSet::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            order.push(current);
            // Reverse so the smallest device name is visited first.
            let children: Vec<CircuitId> = self.children(current).map(|(_, c)| c.index).collect();
            stack.extend(children.into_iter().rev());
        }
        order
    }

    /// Diffs of `id` and all of its descendants, in subtree order
    pub fn diffs_in_subtree(&self, id: CircuitId) -> Vec<&DiffEntry> {
        self.subtree(id)
            .into_iter()
            .filter_map(|cid| self.circuit(cid))
            .flat_map(|c| c.diffs.iter())
            .collect()
    }

    /// Every diff in the report, in circuit order
    pub fn all_diffs(&self) -> impl Iterator<Item = &DiffEntry> {
        self.circuits.iter().flat_map(|c| c.diffs.iter())
    }

    pub fn diff_count(&self) -> usize {
        self.circuits.iter().map(|c| c.diffs.len()).sum()
    }
}
