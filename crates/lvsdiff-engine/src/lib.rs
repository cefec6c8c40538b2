//! lvsdiff Engine - report parsing boundary
//!
//! Runs the core pipeline (load, extract, link, prune) over one netgen LVS
//! report and folds any failure into a [`Report`] with `ok == false`.

pub mod commands;

pub use commands::export::to_json;
pub use commands::parse::{parse_bytes, parse_file, try_parse_bytes, try_parse_file};
pub use lvsdiff_core::{Report, Summary};
