//! Report document loading and top-level validation.
//!
//! A netgen JSON report is an array with one object per compared circuit.
//! Anything else is rejected here, atomically; per-entry problems are left to
//! [`crate::extract`], which tolerates them.

use crate::errors::{LvsError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read the whole report source into memory.
///
/// # Errors
///
/// - `Open`: the file cannot be opened or read; the message names the path
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| LvsError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Parse report bytes and return the root array's entries.
///
/// # Errors
///
/// - `Json`: the bytes are not valid JSON (diagnostic embedded)
/// - `RootNotArray`: the root value is not an array
/// - `EmptyRoot`: the root array has no entries
pub fn parse_document(bytes: &[u8]) -> Result<Vec<Value>> {
    let root: Value = serde_json::from_slice(bytes).map_err(|e| LvsError::Json {
        message: e.to_string(),
    })?;

    let Value::Array(entries) = root else {
        return Err(LvsError::RootNotArray);
    };
    if entries.is_empty() {
        return Err(LvsError::EmptyRoot);
    }

    tracing::debug!(entries = entries.len(), "report document parsed");
    Ok(entries)
}

/// Read and parse a report file.
///
/// # Errors
///
/// See [`read_source`] and [`parse_document`].
pub fn load_document(path: &Path) -> Result<Vec<Value>> {
    let bytes = read_source(path)?;
    parse_document(&bytes)
}
