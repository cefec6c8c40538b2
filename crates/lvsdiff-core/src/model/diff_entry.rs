//! Diff entry types.
//!
//! A [`DiffEntry`] is one discrepancy between the layout and schematic side
//! of a circuit. The kind is carried by two flat tags, [`DiffType`] and
//! [`DiffSubtype`], since every kind shares the same display fields.

use crate::model::CircuitId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level category of a discrepancy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    #[default]
    Unknown,
    /// A net's connections differ, or the net exists on one side only
    NetMismatch,
    /// Device counts differ (coarse indicator; never emitted as an entry)
    DeviceMismatch,
    /// An instance is missing or unmatched
    InstanceMismatch,
    /// A device parameter differs
    PropertyMismatch,
}

impl DiffType {
    /// Stable label, also used as the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            DiffType::NetMismatch => "net_mismatch",
            DiffType::DeviceMismatch => "device_mismatch",
            DiffType::InstanceMismatch => "instance_mismatch",
            DiffType::PropertyMismatch => "property_mismatch",
            DiffType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Refinement of [`DiffType`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiffSubtype {
    #[default]
    Unknown,
    MissingParameter,
    /// Only one side has connections absent from the other
    MissingConnection,
    /// Both sides have connections absent from the other
    UnmatchedConnections,
    NoMatchingNet,
    MissingInstance,
    NoMatchingInstance,
}

impl DiffSubtype {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DiffSubtype::MissingParameter => "missing parameter",
            DiffSubtype::MissingConnection => "missing connection",
            DiffSubtype::UnmatchedConnections => "unmatched connections",
            DiffSubtype::NoMatchingNet => "no matching net",
            DiffSubtype::MissingInstance => "missing instance",
            DiffSubtype::NoMatchingInstance => "no matching instance",
            DiffSubtype::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DiffSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discrepancy.
///
/// Fields are read-only from outside the crate. `circuit_index` is rewritten
/// once when the owning circuit is renumbered after pruning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    #[serde(rename = "type")]
    diff_type: DiffType,
    subtype: DiffSubtype,
    name: String,
    layout_cell: String,
    schematic_cell: String,
    details: String,
    circuit_index: CircuitId,
}

impl DiffEntry {
    pub fn new(
        diff_type: DiffType,
        subtype: DiffSubtype,
        name: impl Into<String>,
        layout_cell: impl Into<String>,
        schematic_cell: impl Into<String>,
        details: impl Into<String>,
        circuit_index: CircuitId,
    ) -> Self {
        Self {
            diff_type,
            subtype,
            name: name.into(),
            layout_cell: layout_cell.into(),
            schematic_cell: schematic_cell.into(),
            details: details.into(),
            circuit_index,
        }
    }

    pub fn diff_type(&self) -> DiffType {
        self.diff_type
    }

    pub fn subtype(&self) -> DiffSubtype {
        self.subtype
    }

    /// Identifying label of the object (device, net or instance)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout_cell(&self) -> &str {
        &self.layout_cell
    }

    pub fn schematic_cell(&self) -> &str {
        &self.schematic_cell
    }

    /// Human-readable explanation
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Index of the owning circuit in the current report
    pub fn circuit_index(&self) -> CircuitId {
        self.circuit_index
    }

    pub(crate) fn set_circuit_index(&mut self, index: CircuitId) {
        self.circuit_index = index;
    }
}
