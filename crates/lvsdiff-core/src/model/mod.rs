//! Report data model.
//!
//! Plain serde structs: circuits in an index-addressed arena, their diff
//! entries, and the counters aggregated over both.

pub mod circuit;
pub mod diff_entry;
pub mod report;
pub mod summary;

pub use circuit::{Circuit, CircuitId};
pub use diff_entry::{DiffEntry, DiffSubtype, DiffType};
pub use report::Report;
pub use summary::Summary;
