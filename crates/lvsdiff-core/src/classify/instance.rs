//! Instance matching results.
//!
//! `badelements` lists instances the comparison tool could not match, as
//! positionally aligned layout/schematic lists.

use crate::classify::{as_slice, contains_ci, side_pair, str_at, CircuitContext};
use crate::model::{DiffEntry, DiffSubtype, DiffType};
use serde_json::Value;

/// Instance name marker for "no counterpart"; matched case-insensitively
pub const NO_MATCHING_INSTANCE: &str = "(no matching instance)";

/// Normalize `badelements` into (layout, schematic) list pairs.
///
/// Three shapes occur: a bare `[A, B]`, a single wrapped `[[A, B]]`, or a
/// list of groups each optionally wrapped once.
fn element_groups(badelements: &Value) -> Vec<(&[Value], &[Value])> {
    match as_slice(badelements) {
        [] => Vec::new(),
        [Value::Array(a), Value::Array(b)] => vec![(a.as_slice(), b.as_slice())],
        [Value::Array(first)] => match first.as_slice() {
            [Value::Array(a), Value::Array(b)] => vec![(a.as_slice(), b.as_slice())],
            _ => Vec::new(),
        },
        groups => groups.iter().filter_map(side_pair).collect(),
    }
}

/// Emit InstanceMismatch entries for one circuit's `badelements` section.
pub fn classify_instances(badelements: &Value, ctx: &CircuitContext<'_>) -> Vec<DiffEntry> {
    let mut diffs = Vec::new();
    for (layout, schematic) in element_groups(badelements) {
        for slot in 0..layout.len().max(schematic.len()) {
            let elem_a = layout.get(slot).map(as_slice).unwrap_or_default();
            let elem_b = schematic.get(slot).map(as_slice).unwrap_or_default();
            classify_slot(elem_a, elem_b, ctx, &mut diffs);
        }
    }
    diffs
}

fn is_missing(descriptor: &[Value]) -> bool {
    descriptor.is_empty() || contains_ci(str_at(descriptor, 0), NO_MATCHING_INSTANCE)
}

/// Instance name up to its first `:` separator
fn base_name(name: &str) -> &str {
    name.split_once(':').map_or(name, |(head, _)| head)
}

fn classify_slot(
    elem_a: &[Value],
    elem_b: &[Value],
    ctx: &CircuitContext<'_>,
    diffs: &mut Vec<DiffEntry>,
) {
    let name_a = str_at(elem_a, 0);
    let name_b = str_at(elem_b, 0);

    match (is_missing(elem_a), is_missing(elem_b)) {
        (true, true) => {}
        (true, false) => diffs.push(ctx.entry(
            DiffType::InstanceMismatch,
            DiffSubtype::MissingInstance,
            name_b,
            "The instance is present only in Schematics circuit",
        )),
        (false, true) => diffs.push(ctx.entry(
            DiffType::InstanceMismatch,
            DiffSubtype::MissingInstance,
            name_a,
            "The instance is present only in Layout circuit",
        )),
        (false, false) => {
            diffs.push(ctx.entry(
                DiffType::InstanceMismatch,
                DiffSubtype::NoMatchingInstance,
                base_name(name_a),
                format!(
                    "Instance {} present in Layout circuit has no matching instance",
                    name_a
                ),
            ));
            diffs.push(ctx.entry(
                DiffType::InstanceMismatch,
                DiffSubtype::NoMatchingInstance,
                base_name(name_b),
                format!(
                    "Instance {} present in Schematics circuit has no matching instance",
                    name_b
                ),
            ));
        }
    }
}
