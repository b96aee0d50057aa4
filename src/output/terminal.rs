use std::fmt::Write;

use super::fmt_score;
use crate::drift::DriftReport;
use crate::errors::Result;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::stats::Summary;

const DIVIDER: &str = "----------------------------------------";

pub fn render_report(report: &DriftReport, config: FormattingConfig) -> Result<String> {
    let formatter = ColoredFormatter::new(config);
    let mut out = String::new();

    writeln!(out, "{}", formatter.header("Score Drift Check"))?;
    writeln!(out, "{DIVIDER}")?;
    writeln!(
        out,
        "New score:  {} ({})",
        formatter.bold(&fmt_score(report.new_score)),
        report.direction
    )?;
    writeln!(out, "History:    {} scores", report.summary.count)?;
    writeln!(out)?;

    for result in &report.results {
        let label = result.kind.label(report.direction);
        let status = if result.drifted {
            format!(
                "{} {}",
                formatter.symbol("✗", "[DRIFT]"),
                formatter.error("drift")
            )
        } else {
            format!("{} {}", formatter.symbol("✓", "[OK]"), formatter.success("ok"))
        };
        writeln!(
            out,
            "  {:<10} bound {:>10}  {}",
            label,
            fmt_score(result.threshold),
            status
        )?;
    }

    writeln!(out)?;
    let verdict = match report.drift_count() {
        0 => formatter.success("No drift detected"),
        n => formatter.error(&format!("Drift detected by {n} of {} tests", report.results.len())),
    };
    writeln!(out, "{verdict}")?;

    if report.summary.is_degenerate() {
        writeln!(
            out,
            "{}",
            formatter.warning("History has no spread; all bounds equal the single observed value")
        )?;
    }

    writeln!(
        out,
        "{}",
        formatter.dim(&format!(
            "k = {}, m = {}",
            report.thresholds.std_multiplier, report.thresholds.iqr_multiplier
        ))
    )?;
    Ok(out)
}

pub fn render_summary(summary: &Summary, config: FormattingConfig) -> Result<String> {
    let formatter = ColoredFormatter::new(config);
    let mut out = String::new();

    writeln!(out, "{}", formatter.header("Score History"))?;
    writeln!(out, "{DIVIDER}")?;
    writeln!(out, "  {:<8} {}", "count", summary.count)?;
    for (name, value) in [
        ("min", summary.min),
        ("max", summary.max),
        ("mean", summary.mean),
        ("std", summary.std_dev),
        ("q25", summary.q25),
        ("median", summary.median),
        ("q75", summary.q75),
        ("iqr", summary.iqr),
    ] {
        writeln!(out, "  {:<8} {}", name, fmt_score(value))?;
    }
    Ok(out)
}
