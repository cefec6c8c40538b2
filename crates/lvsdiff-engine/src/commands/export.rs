//! Report serialization for downstream consumers.

use lvsdiff_core::errors::Result;
use lvsdiff_core::schema::FIELD_KEPT_COUNT;
use lvsdiff_core::{log_op_end, log_op_error, log_op_start, LvsError, Report};

/// Serialize a report as pretty-printed camelCase JSON
///
/// ## Errors
///
/// - `Serialization`: the report could not be encoded
pub fn to_json(report: &Report) -> Result<String> {
    log_op_start!("to_json", { FIELD_KEPT_COUNT } = report.circuits.len());
    let start = std::time::Instant::now();

    let json = serde_json::to_string_pretty(report).map_err(|e| {
        let err = LvsError::from(e);
        log_op_error!(
            "to_json",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        err
    })?;

    log_op_end!(
        "to_json",
        duration_ms = start.elapsed().as_millis() as u64,
        output_len = json.len()
    );
    Ok(json)
}
