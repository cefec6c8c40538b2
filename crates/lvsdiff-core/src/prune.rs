//! Diff-driven pruning and report aggregation.
//!
//! Only circuits that have diffs, or that lead to a subcircuit with diffs,
//! survive. Survivors are renumbered densely and relinked.

use crate::hierarchy::link_hierarchy;
use crate::model::{Circuit, CircuitId, Report, Summary};
use crate::schema::{FIELD_CIRCUIT_COUNT, FIELD_KEPT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done(bool),
}

/// For each circuit, whether it or any linked descendant has diffs.
///
/// A link back to a circuit still being evaluated counts as "no diffs", so
/// link cycles terminate.
pub fn keep_flags(circuits: &[Circuit]) -> Vec<bool> {
    let mut marks = vec![Mark::Unvisited; circuits.len()];
    let mut stack: Vec<(CircuitId, bool)> = Vec::new();

    for root in 0..circuits.len() {
        stack.push((root, false));
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                let keep = circuits[id].has_diffs()
                    || circuits[id]
                        .subcircuits
                        .values()
                        .any(|&child| marks.get(child) == Some(&Mark::Done(true)));
                marks[id] = Mark::Done(keep);
                continue;
            }
            if marks[id] != Mark::Unvisited {
                continue;
            }
            marks[id] = Mark::InProgress;
            stack.push((id, true));
            for &child in circuits[id].subcircuits.values() {
                if marks.get(child) == Some(&Mark::Unvisited) {
                    stack.push((child, false));
                }
            }
        }
    }

    marks
        .into_iter()
        .map(|mark| mark == Mark::Done(true))
        .collect()
}

/// Drop diff-free branches, renumber survivors, sum their summaries and
/// relink the survivors' hierarchy.
///
/// `circuits` must already be linked (see [`link_hierarchy`]).
pub fn prune(circuits: Vec<Circuit>) -> Report {
    let flags = keep_flags(&circuits);
    let total = circuits.len();

    let mut summary = Summary::default();
    let mut kept: Vec<Circuit> = circuits
        .into_iter()
        .zip(flags)
        .filter_map(|(circuit, keep)| keep.then_some(circuit))
        .collect();

    for (index, circuit) in kept.iter_mut().enumerate() {
        circuit.reindex(index);
        summary.accumulate(&circuit.summary);
    }
    link_hierarchy(&mut kept);

    tracing::debug!(
        { FIELD_CIRCUIT_COUNT } = total,
        { FIELD_KEPT_COUNT } = kept.len(),
        "circuits pruned"
    );
    Report::new(summary, kept)
}
