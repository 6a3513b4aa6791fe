//! Observability subsystem for pxsort
//!
//! Structured diagnostic logging for the query pipeline. Logging is
//! read-only with respect to execution: it never changes what a query
//! produces, and the parser and engine contracts hold with it disabled.
//!
//! # Principles
//!
//! 1. One log line = one event
//! 2. Synchronous, no buffering
//! 3. Deterministic key ordering
//! 4. Diagnostics go to stderr; stdout stays clean

mod logger;

pub use logger::{Logger, Severity};
