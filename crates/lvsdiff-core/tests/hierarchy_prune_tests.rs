use lvsdiff_core::extract::extract_circuits;
use lvsdiff_core::hierarchy::link_hierarchy;
use lvsdiff_core::prune::prune;
use lvsdiff_core::Report;
use proptest::prelude::*;
use serde_json::{json, Value};

fn with_property_diff(name: &str, devices: &[&str]) -> Value {
    json!({
        "name": [name, format!("{name}_sch")],
        "devices": [devices.iter().map(|d| json!([d, 1])).collect::<Vec<_>>(), []],
        "properties": [[["m1", [["w", "1u"]]], ["m1", [["w", "2u"]]]]]
    })
}

fn clean(name: &str, devices: &[&str]) -> Value {
    json!({
        "name": [name, format!("{name}_sch")],
        "devices": [devices.iter().map(|d| json!([d, 1])).collect::<Vec<_>>(), []]
    })
}

fn build(entries: &[Value]) -> Report {
    let mut circuits = extract_circuits(entries);
    link_hierarchy(&mut circuits);
    prune(circuits)
}

#[test]
fn test_diff_free_parent_kept_only_above_a_diff() {
    // GIVEN top -> mid -> leaf(diff), plus an unrelated clean circuit
    let entries = vec![
        with_property_diff("leaf", &[]),
        clean("other", &[]),
        clean("mid", &["leaf"]),
        clean("top", &["mid", "other"]),
    ];

    // WHEN building the report
    let report = build(&entries);

    // THEN the clean branch is dropped and the chain survives
    let cells: Vec<_> = report.circuits.iter().map(|c| c.layout_cell.as_str()).collect();
    assert_eq!(cells, vec!["leaf", "mid", "top"]);

    // AND links are rebuilt over the survivors only
    assert_eq!(report.circuits[1].subcircuits.get("leaf"), Some(&0));
    assert_eq!(report.circuits[2].subcircuits.get("mid"), Some(&1));
    assert!(!report.circuits[2].subcircuits.contains_key("other"));
    let roots: Vec<_> = report.top_level().map(|c| c.layout_cell.as_str()).collect();
    assert_eq!(roots, vec!["top"]);
}

#[test]
fn test_subtree_navigation_after_prune() {
    let entries = vec![
        with_property_diff("leaf", &[]),
        with_property_diff("top", &["leaf"]),
    ];
    let report = build(&entries);

    assert_eq!(report.subtree(1), vec![1, 0]);
    assert_eq!(report.diffs_in_subtree(1).len(), 2);
    assert_eq!(report.diffs_in_subtree(0).len(), 1);
    let children: Vec<_> = report.children(1).map(|(name, c)| (name, c.index)).collect();
    assert_eq!(children, vec![("leaf", 0)]);
    assert_eq!(report.circuits[1].title(), "top vs top_sch");
}

#[test]
fn test_link_cycle_does_not_hang() {
    let entries = vec![
        clean("a", &["b"]),
        with_property_diff("b", &["a"]),
    ];
    let report = build(&entries);

    assert_eq!(report.circuits.len(), 2);
    assert_eq!(report.subtree(0), vec![0, 1]);
}

#[test]
fn test_report_summary_sums_survivors_and_takes_last_cells() {
    let mut top = clean("top", &["leaf"]);
    top["nets"] = json!([10]);
    let mut leaf = with_property_diff("leaf", &[]);
    leaf["nets"] = json!([4]);
    let mut dropped = clean("dropped", &[]);
    dropped["nets"] = json!([99]);

    let report = build(&[leaf, dropped, top]);

    assert_eq!(report.summary.total_nets, 14);
    assert_eq!(report.summary.layout_cell, "top");
    assert_eq!(report.summary.schematic_cell, "top_sch");
}

proptest! {
    #[test]
    fn prop_reindex_matches_position(flags in proptest::collection::vec(any::<bool>(), 1..12)) {
        // Chain c0 <- c1 <- c2 ..., diffs where flags[i] is set.
        let entries: Vec<Value> = flags
            .iter()
            .enumerate()
            .map(|(i, has_diff)| {
                let name = format!("c{i}");
                let child = format!("c{}", i.wrapping_sub(1));
                let devices: Vec<&str> = if i > 0 { vec![child.as_str()] } else { vec![] };
                if *has_diff {
                    with_property_diff(&name, &devices)
                } else {
                    clean(&name, &devices)
                }
            })
            .collect();

        let report = build(&entries);

        for (position, circuit) in report.circuits.iter().enumerate() {
            prop_assert_eq!(circuit.index, position);
            for diff in &circuit.diffs {
                prop_assert_eq!(diff.circuit_index(), position);
            }
            prop_assert!(!circuit.subcircuits.values().any(|&child| child == position));
        }

        // Everything at or above the first diff survives.
        let expected = flags.iter().position(|f| *f).map_or(0, |first| flags.len() - first);
        prop_assert_eq!(report.circuits.len(), expected);
    }
}
