use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::config::{Overrides, ScoredriftConfig, Settings};
use crate::drift::{self, Direction, DriftReport};
use crate::io::destinations::destination_for;
use crate::output::{self, OutputFormat};
use crate::scores::ScoreHistory;

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub scores: Option<PathBuf>,
    pub new_score: f64,
    pub direction: Option<Direction>,
    pub std_multiplier: Option<f64>,
    pub iqr_multiplier: Option<f64>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

/// Run the drift tests and write the rendered report.
///
/// Returns the report so the caller can decide on an exit status.
pub fn run_check(config: CheckConfig, file_config: &ScoredriftConfig) -> Result<DriftReport> {
    let format = config
        .format
        .or_else(|| config.output.as_deref().and_then(OutputFormat::from_extension));
    let settings = Settings::resolve(
        file_config,
        Overrides {
            scores: config.scores,
            direction: config.direction,
            std_multiplier: config.std_multiplier,
            iqr_multiplier: config.iqr_multiplier,
            format,
        },
    );

    let history = ScoreHistory::load(&settings.scores)
        .with_context(|| format!("Loading score history {}", settings.scores.display()))?;
    let report = drift::detect(
        &history,
        config.new_score,
        settings.direction,
        settings.thresholds,
    )?;
    info!(
        "Checked score {} against {} previous scores: {} of {} tests flagged drift",
        report.new_score,
        history.len(),
        report.drift_count(),
        report.results.len()
    );

    let formatting = super::formatting_for(config.plain, config.output.as_deref());
    let rendered = output::render_report(&report, settings.format, formatting)?;

    let destination = destination_for(config.output);
    destination.write_str(&rendered)?;
    destination.flush()?;
    info!("Wrote {:?} report to {}", settings.format, destination.description());

    Ok(report)
}
