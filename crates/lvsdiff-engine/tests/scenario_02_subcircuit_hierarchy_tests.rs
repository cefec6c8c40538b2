/// Scenario 2: Parent circuit linked to a child with net diffs
///
/// The parent has no diffs of its own and survives pruning only because
/// its subcircuit does.
use lvsdiff_core::{DiffSubtype, DiffType};
use lvsdiff_engine::parse_file;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_scenario_02_parent_links_child() {
    // GIVEN a report where "top" instantiates "buffer"
    // WHEN parsing it
    let report = parse_file(fixture("fixture_b.json"));

    // THEN both circuits survive
    assert!(report.ok);
    assert_eq!(report.circuits.len(), 2);

    // AND the parent links exactly one subcircuit
    let parent = report
        .circuits
        .iter()
        .find(|c| c.layout_cell == "top")
        .expect("parent should be kept");
    assert!(parent.diffs.is_empty());
    assert_eq!(parent.subcircuits.len(), 1);
    let child = parent.subcircuits["buffer"];
    assert_eq!(report.circuits[child].layout_cell, "buffer");

    // AND only the parent is a root
    let roots: Vec<_> = report.top_level().map(|c| c.index).collect();
    assert_eq!(roots, vec![parent.index]);
}

#[test]
fn test_scenario_02_child_net_diffs_in_fixed_order() {
    let report = parse_file(fixture("fixture_b.json"));
    let child = &report.circuits[0];

    let kinds: Vec<_> = child.diffs.iter().map(|d| (d.subtype(), d.name())).collect();
    assert_eq!(
        kinds,
        vec![
            (DiffSubtype::MissingConnection, "Gnd"),
            (DiffSubtype::MissingConnection, "Vdd"),
            (DiffSubtype::NoMatchingNet, "dummy_1"),
            (DiffSubtype::NoMatchingNet, "dummy_2"),
            (DiffSubtype::NoMatchingNet, "dummy_3"),
            (DiffSubtype::NoMatchingNet, "dummy_4"),
        ]
    );
    assert!(child
        .diffs
        .iter()
        .all(|d| d.diff_type() == DiffType::NetMismatch));
    assert_eq!(
        child.diffs[0].details(),
        "The following pins are connected only in Layout circuit: dummy_tap:1 (1)"
    );
    assert_eq!(
        child.diffs[5].details(),
        "No matching net in Layout circuit for dummy_4 (connected to dummy_cap:2 (1))"
    );
    assert_eq!(child.summary.net_mismatches, 6);
}

#[test]
fn test_scenario_02_report_summary() {
    let report = parse_file(fixture("fixture_b.json"));

    assert_eq!(report.summary.net_mismatches, 6);
    assert_eq!(report.summary.device_mismatches, 0);
    assert_eq!(report.summary.total_nets, 10);
    assert_eq!(report.summary.layout_cell, "top");
    assert_eq!(report.diff_count(), 6);
    assert_eq!(report.diffs_in_subtree(1).len(), 6);
}
