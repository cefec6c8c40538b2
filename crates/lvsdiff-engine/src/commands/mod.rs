//! Engine commands
//!
//! Each command owns the lifecycle logging of its operation.

pub mod export;
pub mod parse;
