//! Net connectivity comparison.
//!
//! `badnets` pairs layout nets with schematic nets. Nets are matched across
//! sides by normalized name and compared as sets of canonical connection
//! strings.

use crate::classify::{
    as_slice, contains_ci, int_at, side_pair, str_at, CircuitContext, LAYOUT_SIDE, SCHEMATIC_SIDE,
};
use crate::model::{DiffEntry, DiffSubtype, DiffType};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Net name marker for "no counterpart"; matched case-insensitively
pub const NO_MATCHING_NET: &str = "(no matching net)";
/// Normalized key shared by every spelling of ground
pub const GROUND_KEY: &str = "0";

#[derive(Debug, Clone)]
struct NetInfo {
    raw_name: String,
    connections: Vec<String>,
}

/// Per-side net index with one shared first-seen key order
#[derive(Debug, Default)]
struct NetTable {
    layout: HashMap<String, NetInfo>,
    schematic: HashMap<String, NetInfo>,
    order: Vec<String>,
    seen: HashSet<String>,
}

impl NetTable {
    fn capture(&mut self, descriptor: &[Value], layout_side: bool) {
        if descriptor.len() < 2 {
            return;
        }
        let raw_name = str_at(descriptor, 0);
        if contains_ci(raw_name, NO_MATCHING_NET) {
            return;
        }
        let key = normalize_net_name(raw_name);
        let info = NetInfo {
            raw_name: raw_name.to_string(),
            connections: connection_list(as_slice(&descriptor[1])),
        };
        if self.seen.insert(key.clone()) {
            self.order.push(key.clone());
        }
        let side = if layout_side {
            &mut self.layout
        } else {
            &mut self.schematic
        };
        // Last write wins; order stays first-seen.
        side.insert(key, info);
    }
}

/// Matching key for a net name.
///
/// Trims, lowercases and folds `gnd` and `0` to [`GROUND_KEY`].
pub fn normalize_net_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    if lower == "gnd" || lower == GROUND_KEY {
        GROUND_KEY.to_string()
    } else {
        lower
    }
}

/// Canonical `"<device>:<port> (<count>)"` strings, input order kept.
fn connection_list(connections: &[Value]) -> Vec<String> {
    connections
        .iter()
        .map(as_slice)
        .filter(|conn| conn.len() >= 2)
        .map(|conn| {
            format!(
                "{}:{} ({})",
                str_at(conn, 0),
                str_at(conn, 1),
                int_at(conn, 2)
            )
        })
        .collect()
}

/// Connections of `ours` that do not appear in `theirs`, in `ours` order.
fn exclusive(ours: &[String], theirs: &[String]) -> Vec<String> {
    let theirs: HashSet<&str> = theirs.iter().map(String::as_str).collect();
    ours.iter()
        .filter(|conn| !theirs.contains(conn.as_str()))
        .cloned()
        .collect()
}

/// Emit NetMismatch entries for one circuit's `badnets` section.
pub fn classify_nets(badnets: &Value, ctx: &CircuitContext<'_>) -> Vec<DiffEntry> {
    let mut table = NetTable::default();
    for group in as_slice(badnets) {
        let Some((layout_nets, schematic_nets)) = side_pair(group) else {
            continue;
        };
        for net in layout_nets {
            table.capture(as_slice(net), true);
        }
        for net in schematic_nets {
            table.capture(as_slice(net), false);
        }
    }

    let mut diffs = Vec::new();
    for key in &table.order {
        match (table.layout.get(key), table.schematic.get(key)) {
            (Some(net_a), Some(net_b)) => {
                if let Some(entry) = compare_connections(key, net_a, net_b, ctx) {
                    diffs.push(entry);
                }
            }
            (Some(only), None) => diffs.push(unmatched_net(key, only, SCHEMATIC_SIDE, ctx)),
            (None, Some(only)) => diffs.push(unmatched_net(key, only, LAYOUT_SIDE, ctx)),
            (None, None) => {}
        }
    }
    diffs
}

fn compare_connections(
    key: &str,
    net_a: &NetInfo,
    net_b: &NetInfo,
    ctx: &CircuitContext<'_>,
) -> Option<DiffEntry> {
    let only_a = exclusive(&net_a.connections, &net_b.connections);
    let only_b = exclusive(&net_b.connections, &net_a.connections);
    if only_a.is_empty() && only_b.is_empty() {
        return None;
    }

    let subtype = if !only_a.is_empty() && !only_b.is_empty() {
        DiffSubtype::UnmatchedConnections
    } else {
        DiffSubtype::MissingConnection
    };

    let mut clauses = Vec::with_capacity(2);
    for (side, only) in [(LAYOUT_SIDE, &only_a), (SCHEMATIC_SIDE, &only_b)] {
        if !only.is_empty() {
            clauses.push(format!(
                "The following pins are connected only in {} circuit: {}",
                side,
                only.join(", ")
            ));
        }
    }

    let name = [net_a.raw_name.as_str(), net_b.raw_name.as_str(), key]
        .into_iter()
        .find(|n| !n.is_empty())
        .unwrap_or_default();
    Some(ctx.entry(
        DiffType::NetMismatch,
        subtype,
        name,
        clauses.join(" | "),
    ))
}

/// A net present on one side only; `missing_side` names the side lacking it.
fn unmatched_net(
    key: &str,
    net: &NetInfo,
    missing_side: &str,
    ctx: &CircuitContext<'_>,
) -> DiffEntry {
    let name = if net.raw_name.is_empty() {
        key
    } else {
        net.raw_name.as_str()
    };
    ctx.entry(
        DiffType::NetMismatch,
        DiffSubtype::NoMatchingNet,
        name,
        format!(
            "No matching net in {} circuit for {} (connected to {})",
            missing_side,
            net.raw_name,
            net.connections.join(", ")
        ),
    )
}
