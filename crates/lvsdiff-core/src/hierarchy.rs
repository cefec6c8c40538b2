//! Subcircuit linking.
//!
//! A circuit's layout device-type names that match another circuit's cell
//! name make that circuit its subcircuit. Links are stored as
//! [`CircuitId`]s into the same slice.

use crate::model::{Circuit, CircuitId};
use std::collections::HashMap;

/// Rebuild every `subcircuits` map and `is_top_level` flag from scratch.
pub fn link_hierarchy(circuits: &mut [Circuit]) {
    for circuit in circuits.iter_mut() {
        circuit.subcircuits.clear();
        circuit.is_top_level = true;
    }

    let by_layout = cell_index(circuits, |c| &c.layout_cell);
    let by_schematic = cell_index(circuits, |c| &c.schematic_cell);

    let mut links = 0usize;
    for parent in 0..circuits.len() {
        for position in 0..circuits[parent].devices_a.len() {
            let name = &circuits[parent].devices_a[position];
            if name.is_empty() || circuits[parent].subcircuits.contains_key(name) {
                continue;
            }
            let Some(child) = by_layout
                .get(name.as_str())
                .or_else(|| by_schematic.get(name.as_str()))
                .copied()
            else {
                continue;
            };
            if child == parent {
                continue;
            }
            let name = name.clone();
            circuits[parent].subcircuits.insert(name, child);
            circuits[child].is_top_level = false;
            links += 1;
        }
    }

    tracing::debug!(circuits = circuits.len(), links, "hierarchy linked");
}

/// Cell name to circuit id; later circuits win, empty names are skipped.
fn cell_index<'a>(
    circuits: &'a [Circuit],
    cell: impl Fn(&'a Circuit) -> &'a String,
) -> HashMap<String, CircuitId> {
    circuits
        .iter()
        .enumerate()
        .map(|(id, c)| (cell(c), id))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, id)| (name.clone(), id))
        .collect()
}
