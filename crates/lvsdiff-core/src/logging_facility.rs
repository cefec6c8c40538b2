//! Structured logging for report parsing
//!
//! - [`init`] installs the process-wide subscriber once, per [`Profile`]
//! - `log_op_start!` / `log_op_end!` / `log_op_error!` emit the lifecycle
//!   events of a whole-report operation; only the engine crate calls them
//! - [`init_test_capture`] records events in memory for assertions
//!
//! ```rust
//! use lvsdiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
