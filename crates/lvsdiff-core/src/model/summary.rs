//! Mismatch counters and totals.

use serde::{Deserialize, Serialize};

/// Aggregate counters for one circuit, or for a whole report
///
/// At report level `layout_cell` / `schematic_cell` hold the pair of the
/// last circuit folded in, not an aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub device_mismatches: u32,
    pub net_mismatches: u32,
    pub shorts: u32,
    pub opens: u32,
    pub total_devices: i64,
    pub total_nets: i64,
    pub layout_cell: String,
    pub schematic_cell: String,
}

impl Summary {
    /// Create an empty summary for the given cell pair
    pub fn for_cells(layout_cell: impl Into<String>, schematic_cell: impl Into<String>) -> Self {
        Self {
            layout_cell: layout_cell.into(),
            schematic_cell: schematic_cell.into(),
            ..Self::default()
        }
    }

    /// Add another summary's counters into this one
    ///
    /// Counters are summed field by field, saturating at their bounds; the
    /// cell-name pair is overwritten with `other`'s.
    pub fn accumulate(&mut self, other: &Summary) {
        self.device_mismatches = self.device_mismatches.saturating_add(other.device_mismatches);
        self.net_mismatches = self.net_mismatches.saturating_add(other.net_mismatches);
        self.shorts = self.shorts.saturating_add(other.shorts);
        self.opens = self.opens.saturating_add(other.opens);
        self.total_devices = self.total_devices.saturating_add(other.total_devices);
        self.total_nets = self.total_nets.saturating_add(other.total_nets);
        self.layout_cell = other.layout_cell.clone();
        self.schematic_cell = other.schematic_cell.clone();
    }
}
