use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{Overrides, ScoredriftConfig, Settings};
use crate::io::destinations::destination_for;
use crate::output::{self, OutputFormat};
use crate::scores::ScoreHistory;
use crate::stats::Summary;

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub scores: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn run_stats(config: StatsConfig, file_config: &ScoredriftConfig) -> Result<Summary> {
    // `output.default_format` configures `check`; summaries default to the table.
    let format = config
        .format
        .or_else(|| config.output.as_deref().and_then(OutputFormat::from_extension))
        .unwrap_or(OutputFormat::Terminal);
    let settings = Settings::resolve(
        file_config,
        Overrides {
            scores: config.scores,
            format: Some(format),
            ..Overrides::default()
        },
    );

    let history = ScoreHistory::load(&settings.scores)
        .with_context(|| format!("Loading score history {}", settings.scores.display()))?;
    let summary = history.summary()?;

    let formatting = super::formatting_for(config.plain, config.output.as_deref());
    let rendered = output::render_summary(&summary, settings.format, formatting)?;

    let destination = destination_for(config.output);
    destination.write_str(&rendered)?;
    destination.flush()?;

    Ok(summary)
}
