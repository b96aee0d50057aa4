// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod drift;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod output;
pub mod scores;
pub mod stats;

pub use crate::drift::{detect, Direction, DriftReport, DriftTestKind, DriftThresholds};
pub use crate::errors::{Error, Result};
pub use crate::scores::ScoreHistory;
pub use crate::stats::Summary;
