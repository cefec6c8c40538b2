//! Diff classifiers for one circuit entry of a netgen report.
//!
//! Each classifier reads one section of the entry (`properties`, `badnets`,
//! `badelements`) and returns its diffs in emission order. Sections that are
//! absent or wrongly shaped yield no diffs rather than an error.

pub mod instance;
pub mod net;
pub mod property;

use crate::model::{CircuitId, DiffEntry, DiffSubtype, DiffType};
use serde_json::Value;

/// Side label used in details for side A
pub const LAYOUT_SIDE: &str = "Layout";
/// Side label used in details for side B
pub const SCHEMATIC_SIDE: &str = "Schematics";

/// Owning-circuit data copied into every emitted entry
#[derive(Debug, Clone, Copy)]
pub struct CircuitContext<'a> {
    pub index: CircuitId,
    pub layout_cell: &'a str,
    pub schematic_cell: &'a str,
}

impl<'a> CircuitContext<'a> {
    pub fn new(index: CircuitId, layout_cell: &'a str, schematic_cell: &'a str) -> Self {
        Self {
            index,
            layout_cell,
            schematic_cell,
        }
    }

    pub(crate) fn entry(
        &self,
        diff_type: DiffType,
        subtype: DiffSubtype,
        name: impl Into<String>,
        details: impl Into<String>,
    ) -> DiffEntry {
        DiffEntry::new(
            diff_type,
            subtype,
            name,
            self.layout_cell,
            self.schematic_cell,
            details,
            self.index,
        )
    }
}

/// Elements of `value` if it is an array, otherwise nothing
pub(crate) fn as_slice(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        _ => &[],
    }
}

/// String at `i`, or `""` when absent or not a string
pub(crate) fn str_at(items: &[Value], i: usize) -> &str {
    items.get(i).and_then(Value::as_str).unwrap_or_default()
}

/// Integer at `i`, or 0 when absent or not an integer
pub(crate) fn int_at(items: &[Value], i: usize) -> i64 {
    items.get(i).map(int_value).unwrap_or(0)
}

pub(crate) fn int_value(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })
        .unwrap_or(0)
}

pub(crate) fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Case-insensitive substring test; `needle` must already be lowercase
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Resolve one side-pair group to its (layout, schematic) lists.
///
/// A group wrapped in one extra singleton array is unwrapped once; after that
/// it must be exactly two arrays.
pub(crate) fn side_pair(group: &Value) -> Option<(&[Value], &[Value])> {
    let mut pair = match group {
        Value::Array(items) => items.as_slice(),
        _ => return None,
    };
    if let [inner @ Value::Array(_)] = pair {
        pair = as_slice(inner);
    }
    match pair {
        [Value::Array(a), Value::Array(b)] => Some((a.as_slice(), b.as_slice())),
        _ => None,
    }
}
