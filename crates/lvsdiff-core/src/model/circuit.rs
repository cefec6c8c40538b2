//! Circuit arena nodes.

use crate::model::{DiffEntry, Summary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of a circuit in its report's circuit vector
pub type CircuitId = usize;

/// One layout-vs-schematic comparison unit
///
/// Children are referenced by [`CircuitId`] into the same report-wide
/// vector, never by pointer, so renumbering only requires a relink.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub index: CircuitId,
    pub layout_cell: String,
    pub schematic_cell: String,
    /// Device-type names of the layout side, used as hierarchy keys
    pub devices_a: Vec<String>,
    /// Device-type names of the schematic side
    pub devices_b: Vec<String>,
    /// Property, then net, then instance diffs, in emission order
    pub diffs: Vec<DiffEntry>,
    pub is_top_level: bool,
    /// Device name to child circuit
    pub subcircuits: BTreeMap<String, CircuitId>,
    /// This circuit's own counts, children excluded
    pub summary: Summary,
}

impl Circuit {
    pub fn new(
        index: CircuitId,
        layout_cell: impl Into<String>,
        schematic_cell: impl Into<String>,
    ) -> Self {
        let layout_cell = layout_cell.into();
        let schematic_cell = schematic_cell.into();
        Self {
            index,
            summary: Summary::for_cells(layout_cell.clone(), schematic_cell.clone()),
            layout_cell,
            schematic_cell,
            devices_a: Vec::new(),
            devices_b: Vec::new(),
            diffs: Vec::new(),
            is_top_level: true,
            subcircuits: BTreeMap::new(),
        }
    }

    /// Display title, `"<layout> vs <schematic>"`
    pub fn title(&self) -> String {
        format!("{} vs {}", self.layout_cell, self.schematic_cell)
    }

    pub fn has_diffs(&self) -> bool {
        !self.diffs.is_empty()
    }

    /// Move this circuit to a new index, carrying its diffs along
    pub(crate) fn reindex(&mut self, index: CircuitId) {
        self.index = index;
        for entry in &mut self.diffs {
            entry.set_circuit_index(index);
        }
    }
}
