//! Operation lifecycle macros
//!
//! Every whole-report operation emits one `start` event and then exactly one
//! of `end` / `end_error`. Field names come from [`crate::schema`], and
//! expansion only goes through `$crate`, so callers need no `tracing` or
//! schema imports of their own.

/// Shared expansion: component, op and event fields, then any extras.
#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)+)?) => {
        $crate::__tracing::$level!(
            { $crate::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::schema::FIELD_OP } = $op,
            { $crate::schema::FIELD_EVENT } = $event,
            $($($field)+)?
        )
    };
}

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use lvsdiff_core::log_op_start;
/// log_op_start!("parse_bytes");
/// log_op_start!("parse_file", path = "report.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        $crate::__op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)+)?)
    };
}

/// Log the successful end of an operation with its duration
///
/// # Example
///
/// ```
/// # use lvsdiff_core::log_op_end;
/// log_op_end!("parse_bytes", duration_ms = 42, kept_count = 3usize);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        $crate::__op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            { $crate::schema::FIELD_DURATION_MS } = $duration
            $(, $($field)+)?
        )
    };
}

/// Log a failed operation
///
/// The error converts into [`ExError`](crate::errors::ExError); its kind,
/// stable code and message are recorded.
///
/// # Example
///
/// ```
/// # use lvsdiff_core::{log_op_error, errors::LvsError};
/// log_op_error!("parse_bytes", LvsError::EmptyRoot, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        $crate::__op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            { $crate::schema::FIELD_DURATION_MS } = $duration,
            { $crate::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::schema::FIELD_ERR_CODE } = ex_err.code(),
            { $crate::schema::FIELD_ERR_MESSAGE } = ex_err.message()
            $(, $($field)+)?
        );
    }};
}
