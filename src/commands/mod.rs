//! CLI command implementations.
//!
//! Available commands:
//! - **check**: Run the drift tests for a new score
//! - **stats**: Summarize the score history
//! - **record**: Append a score to the history
//! - **init**: Write a default `.scoredrift.toml`

pub mod check;
pub mod init;
pub mod record;
pub mod stats;

pub use check::{run_check, CheckConfig};
pub use init::init_config;
pub use record::record_score;
pub use stats::{run_stats, StatsConfig};

use crate::formatting::{ColorMode, FormattingConfig};
use std::path::Path;

/// Files never get ANSI escapes; stdout honours `--plain` and the environment.
pub(crate) fn formatting_for(plain: bool, output: Option<&Path>) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else if output.is_some() {
        FormattingConfig {
            color: ColorMode::Never,
            ..FormattingConfig::from_env()
        }
    } else {
        FormattingConfig::from_env()
    }
}
