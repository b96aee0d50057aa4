//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout for the
//! report itself so plain and JSON output stay machine-readable.

pub mod logging;

pub use logging::{filter_directive, init_logging, LoggingError};
