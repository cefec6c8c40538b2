//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Report identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_CIRCUIT_INDEX: &str = "circuit_index";
pub const FIELD_LAYOUT_CELL: &str = "layout_cell";
pub const FIELD_SCHEMATIC_CELL: &str = "schematic_cell";

// Collection sizes
pub const FIELD_INPUT_LEN: &str = "input_len";
pub const FIELD_CIRCUIT_COUNT: &str = "circuit_count";
pub const FIELD_KEPT_COUNT: &str = "kept_count";
pub const FIELD_DIFF_COUNT: &str = "diff_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_MESSAGE: &str = "err_message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
