//! Circuit extraction from report entries.
//!
//! Each root entry becomes one [`Circuit`] with its cell names, device and
//! net counts, and the diffs of all three classifiers. Entries that are not
//! circuit descriptions are skipped without error.

use crate::classify::instance::classify_instances;
use crate::classify::net::classify_nets;
use crate::classify::property::classify_properties;
use crate::classify::{as_slice, int_value, str_at, CircuitContext};
use crate::model::{Circuit, CircuitId};
use crate::schema::{FIELD_CIRCUIT_INDEX, FIELD_LAYOUT_CELL, FIELD_SCHEMATIC_CELL};
use serde_json::Value;

static ABSENT: Value = Value::Null;

/// Build circuits for every usable entry, numbered sequentially from 0.
pub fn extract_circuits(entries: &[Value]) -> Vec<Circuit> {
    let mut circuits = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        match extract_circuit(entry, circuits.len()) {
            Some(circuit) => circuits.push(circuit),
            None => tracing::debug!(position, "skipping entry without a name list"),
        }
    }
    circuits
}

/// Build one circuit, or `None` when `entry` is not an object with a
/// non-empty `name` array.
pub fn extract_circuit(entry: &Value, index: CircuitId) -> Option<Circuit> {
    let object = entry.as_object()?;
    let names = match object.get("name") {
        Some(Value::Array(names)) if !names.is_empty() => names.as_slice(),
        _ => return None,
    };

    let mut circuit = Circuit::new(index, str_at(names, 0), str_at(names, 1));

    if let Some(nets) = object.get("nets").map(as_slice).and_then(<[Value]>::first) {
        circuit.summary.total_nets = int_value(nets);
    }
    if let Some(devices) = object.get("devices") {
        read_devices(as_slice(devices), &mut circuit);
    }

    let section = |key: &str| object.get(key).unwrap_or(&ABSENT);
    let ctx = CircuitContext::new(index, &circuit.layout_cell, &circuit.schematic_cell);

    let mut diffs = classify_properties(section("properties"), &ctx);

    let net_diffs = classify_nets(section("badnets"), &ctx);
    let net_count = count(net_diffs.len());

    let instance_diffs = classify_instances(section("badelements"), &ctx);
    let instance_count = count(instance_diffs.len());

    diffs.extend(net_diffs);
    diffs.extend(instance_diffs);

    circuit.summary.net_mismatches = circuit.summary.net_mismatches.saturating_add(net_count);
    circuit.summary.device_mismatches =
        circuit.summary.device_mismatches.saturating_add(instance_count);
    circuit.diffs = diffs;

    tracing::debug!(
        { FIELD_CIRCUIT_INDEX } = index,
        { FIELD_LAYOUT_CELL } = %circuit.layout_cell,
        { FIELD_SCHEMATIC_CELL } = %circuit.schematic_cell,
        diffs = circuit.diffs.len(),
        "circuit extracted"
    );
    Some(circuit)
}

/// `devices[0]` is the layout side, `devices[1]` the schematic side.
fn read_devices(devices: &[Value], circuit: &mut Circuit) {
    let Some(Value::Array(side_a)) = devices.first() else {
        return;
    };
    let total_a = device_total(side_a, &mut circuit.devices_a);
    circuit.summary.total_devices = total_a;

    if let Some(side_b) = devices.get(1) {
        let total_b = device_total(as_slice(side_b), &mut circuit.devices_b);
        if total_a != total_b {
            // Coarse indicator, not a count.
            circuit.summary.device_mismatches = 1;
        }
    }
}

/// Sum `[name, count]` pairs, collecting string names into `names`.
fn device_total(pairs: &[Value], names: &mut Vec<String>) -> i64 {
    let mut total: i64 = 0;
    for pair in pairs.iter().map(as_slice).filter(|p| p.len() >= 2) {
        if let Some(name) = pair[0].as_str() {
            names.push(name.to_string());
        }
        total = total.saturating_add(int_value(&pair[1]));
    }
    total
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DiffSubtype, DiffType};
    use serde_json::json;

    #[test]
    fn test_skips_non_circuit_entries_and_numbers_the_rest() {
        let entries = vec![
            json!(42),
            json!({"name": []}),
            json!({"name": "inv"}),
            json!({"name": ["a.spice", "a_sch"]}),
            json!({"name": ["b.spice"]}),
        ];
        let circuits = extract_circuits(&entries);
        assert_eq!(circuits.len(), 2);
        assert_eq!(circuits[0].index, 0);
        assert_eq!(circuits[0].layout_cell, "a.spice");
        assert_eq!(circuits[1].index, 1);
        assert_eq!(circuits[1].schematic_cell, "");
    }

    #[test]
    fn test_counts_devices_and_nets() {
        let entry = json!({
            "name": ["top", "top_sch"],
            "nets": [7, 7],
            "devices": [
                [["nfet", 2], ["pfet", 2], ["short"]],
                [["nfet", 2], ["pfet", 3]]
            ]
        });
        let circuit = extract_circuit(&entry, 0).unwrap();
        assert_eq!(circuit.summary.total_nets, 7);
        assert_eq!(circuit.summary.total_devices, 4);
        assert_eq!(circuit.devices_a, vec!["nfet", "pfet"]);
        assert_eq!(circuit.devices_b, vec!["nfet", "pfet"]);
        assert_eq!(circuit.summary.device_mismatches, 1);
        assert!(!circuit.has_diffs());
    }

    #[test]
    fn test_equal_device_totals_do_not_flag() {
        let entry = json!({
            "name": ["top", "top_sch"],
            "devices": [[["inv", 1]], [["inv", 1]]]
        });
        let circuit = extract_circuit(&entry, 0).unwrap();
        assert_eq!(circuit.summary.device_mismatches, 0);
    }

    #[test]
    fn test_huge_device_counts_saturate() {
        let entry = json!({
            "name": ["a", "b"],
            "devices": [[["x", i64::MAX], ["y", 1]], [["x", 1]]]
        });
        let circuit = extract_circuit(&entry, 0).unwrap();
        assert_eq!(circuit.summary.total_devices, i64::MAX);
        assert_eq!(circuit.summary.device_mismatches, 1);
    }

    #[test]
    fn test_diffs_ordered_by_classifier_and_counted() {
        let entry = json!({
            "name": ["c", "c_sch"],
            "properties": [[["m1", [["w", "1u"]]], ["m1", [["w", "2u"]]]]],
            "badnets": [[[["n1", [["m1", "d", 1]]]], [["(no matching net)", []]]]],
            "badelements": [[["m2:nfet"]], [["(no matching instance)"]]]
        });
        let circuit = extract_circuit(&entry, 3).unwrap();
        let types: Vec<DiffType> = circuit.diffs.iter().map(|d| d.diff_type()).collect();
        assert_eq!(
            types,
            vec![
                DiffType::PropertyMismatch,
                DiffType::NetMismatch,
                DiffType::InstanceMismatch
            ]
        );
        assert_eq!(circuit.diffs[2].subtype(), DiffSubtype::MissingInstance);
        assert!(circuit.diffs.iter().all(|d| d.circuit_index() == 3));
        assert_eq!(circuit.summary.net_mismatches, 1);
        assert_eq!(circuit.summary.device_mismatches, 1);
    }
}
