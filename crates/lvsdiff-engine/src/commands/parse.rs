//! Report parse commands with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for report parsing:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Core modules use only `tracing::debug!()` for internal details.

use lvsdiff_core::errors::Result;
use lvsdiff_core::extract::extract_circuits;
use lvsdiff_core::hierarchy::link_hierarchy;
use lvsdiff_core::loader::{load_document, parse_document};
use lvsdiff_core::prune::prune;
use lvsdiff_core::schema::{
    FIELD_CIRCUIT_COUNT, FIELD_DIFF_COUNT, FIELD_INPUT_LEN, FIELD_KEPT_COUNT, FIELD_PATH,
};
use lvsdiff_core::{log_op_end, log_op_error, log_op_start, Report};
use serde_json::Value;
use std::path::Path;

/// Parse report bytes, folding any failure into the returned report
///
/// Never panics on malformed input. On failure `ok` is false, `error`
/// holds the message and the body is empty.
pub fn parse_bytes(bytes: &[u8]) -> Report {
    try_parse_bytes(bytes).unwrap_or_else(|e| Report::failed(e.to_string()))
}

/// Read and parse a report file, folding any failure into the returned
/// report
pub fn parse_file(path: impl AsRef<Path>) -> Report {
    try_parse_file(path).unwrap_or_else(|e| Report::failed(e.to_string()))
}

/// Parse report bytes
///
/// ## Errors
///
/// - `Json`: the bytes are not valid JSON
/// - `RootNotArray`: the root value is not an array
/// - `EmptyRoot`: the root array is empty
pub fn try_parse_bytes(bytes: &[u8]) -> Result<Report> {
    log_op_start!("parse_bytes", { FIELD_INPUT_LEN } = bytes.len());
    let start = std::time::Instant::now();

    let report = parse_document(bytes).map(build_report).map_err(|e| {
        log_op_error!(
            "parse_bytes",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "parse_bytes",
        duration_ms = start.elapsed().as_millis() as u64,
        { FIELD_KEPT_COUNT } = report.circuits.len(),
        { FIELD_DIFF_COUNT } = report.diff_count()
    );
    Ok(report)
}

/// Read and parse a report file
///
/// ## Errors
///
/// - `Open`: the file cannot be opened or read
/// - any error of [`try_parse_bytes`]
pub fn try_parse_file(path: impl AsRef<Path>) -> Result<Report> {
    let path = path.as_ref();
    log_op_start!("parse_file", { FIELD_PATH } = %path.display());
    let start = std::time::Instant::now();

    let report = load_document(path).map(build_report).map_err(|e| {
        log_op_error!(
            "parse_file",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            { FIELD_PATH } = %path.display()
        );
        e
    })?;

    log_op_end!(
        "parse_file",
        duration_ms = start.elapsed().as_millis() as u64,
        { FIELD_KEPT_COUNT } = report.circuits.len(),
        { FIELD_DIFF_COUNT } = report.diff_count()
    );
    Ok(report)
}

/// Extract, link and prune the entries of a validated document.
fn build_report(entries: Vec<Value>) -> Report {
    let mut circuits = extract_circuits(&entries);
    tracing::debug!(
        { FIELD_CIRCUIT_COUNT } = circuits.len(),
        entries = entries.len(),
        "circuits extracted"
    );
    link_hierarchy(&mut circuits);
    prune(circuits)
}
