use std::fmt::Write;

use super::fmt_score;
use crate::drift::DriftReport;
use crate::errors::Result;
use crate::stats::Summary;

pub fn render_report(report: &DriftReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "# Score Drift Report\n")?;
    writeln!(
        out,
        "New score **{}** ({}), compared against {} previous scores.\n",
        fmt_score(report.new_score),
        report.direction,
        report.summary.count
    )?;

    writeln!(out, "## Drift Tests\n")?;
    writeln!(out, "| Test | Bound | Drift |")?;
    writeln!(out, "|------|------:|:-----:|")?;
    for result in &report.results {
        writeln!(
            out,
            "| {} | {} | {} |",
            result.kind.label(report.direction),
            fmt_score(result.threshold),
            if result.drifted { "yes" } else { "no" }
        )?;
    }

    let verdict = if report.any_drift() {
        format!(
            "**Drift detected** by {} of {} tests.",
            report.drift_count(),
            report.results.len()
        )
    } else {
        "No drift detected.".to_string()
    };
    writeln!(out, "\n{verdict}\n")?;

    out.push_str(&render_summary(&report.summary)?);
    Ok(out)
}

pub fn render_summary(summary: &Summary) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "## Score History\n")?;
    writeln!(out, "| Statistic | Value |")?;
    writeln!(out, "|-----------|------:|")?;
    writeln!(out, "| count | {} |", summary.count)?;
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
        writeln!(out, "| {name} | {} |", fmt_score(value))?;
    }
    Ok(out)
}
