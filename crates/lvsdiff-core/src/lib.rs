//! lvsdiff Core - layout-vs-schematic report diff engine
//!
//! This crate turns a netgen LVS comparison report (JSON) into a normalized,
//! hierarchical and categorized set of discrepancies, including:
//! - Document loading and top-level shape validation
//! - Per-circuit extraction of cell names and device/net counts
//! - Property, net and instance diff classification
//! - Subcircuit hierarchy linking over an index-based circuit arena
//! - Diff-reachability pruning, re-indexing and summary aggregation
//!
//! Lifecycle logging for whole-report operations lives in `lvsdiff-engine`;
//! this crate only emits `tracing::debug!` details.

pub mod classify;
pub mod errors;
pub mod extract;
pub mod hierarchy;
pub mod loader;
pub mod logging_facility;
pub mod model;
pub mod prune;

/// Canonical log field keys and event names
pub use lvsdiff_core_types::schema;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, LvsError, Result};
pub use model::{Circuit, CircuitId, DiffEntry, DiffSubtype, DiffType, Report, Summary};
