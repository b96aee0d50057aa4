//! Renderers for drift reports and history summaries.
//!
//! Every renderer builds a `String`; writing it somewhere is left to an
//! [`OutputDestination`](crate::io::OutputDestination).

pub mod json;
pub mod markdown;
pub mod plain;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::drift::DriftReport;
use crate::errors::Result;
use crate::formatting::FormattingConfig;
use crate::stats::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `True`/`False` line per test
    #[default]
    Plain,
    /// Colored, human-readable report
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Infer a format from an output file extension, if it names one.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

pub fn render_report(
    report: &DriftReport,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => plain::render_report(report),
        OutputFormat::Terminal => terminal::render_report(report, formatting)?,
        OutputFormat::Json => json::render(report)?,
        OutputFormat::Markdown => markdown::render_report(report)?,
    })
}

pub fn render_summary(
    summary: &Summary,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => plain::render_summary(summary),
        OutputFormat::Terminal => terminal::render_summary(summary, formatting)?,
        OutputFormat::Json => json::render(summary)?,
        OutputFormat::Markdown => markdown::render_summary(summary)?,
    })
}

/// Fixed-precision float formatting shared by the human-readable renderers.
pub(crate) fn fmt_score(value: f64) -> String {
    format!("{value:.4}")
}
