//! Core types shared across the lvsdiff facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! macros, the test capture layer and the engine boundary, so that field
//! keys and event names never drift between emitters and assertions.

pub mod schema;
