use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::report::{DriftReport, DriftTestKind, DriftTestResult};
use super::Direction;
use crate::errors::{Error, Result};
use crate::scores::ScoreHistory;
use crate::stats::Summary;

/// Multipliers applied to the spread statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftThresholds {
    /// Standard deviations from the mean before the parametric test fires
    #[serde(default = "default_std_multiplier")]
    pub std_multiplier: f64,

    /// Interquartile ranges beyond the quartile before the IQR test fires
    #[serde(default = "default_iqr_multiplier")]
    pub iqr_multiplier: f64,
}

impl Default for DriftThresholds {
    fn default() -> Self {
        Self {
            std_multiplier: default_std_multiplier(),
            iqr_multiplier: default_iqr_multiplier(),
        }
    }
}

impl DriftThresholds {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("std_multiplier", self.std_multiplier),
            ("iqr_multiplier", self.iqr_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_input(format!(
                    "{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn default_std_multiplier() -> f64 {
    2.0
}

fn default_iqr_multiplier() -> f64 {
    1.5
}

/// Run all three drift tests for `new_score` against `history`.
pub fn detect(
    history: &ScoreHistory,
    new_score: f64,
    direction: Direction,
    thresholds: DriftThresholds,
) -> Result<DriftReport> {
    if !new_score.is_finite() {
        return Err(Error::invalid_input(format!(
            "new score must be finite, got {new_score}"
        )));
    }
    thresholds.validate()?;

    let summary = history.summary()?;
    if summary.is_degenerate() {
        warn!(
            "Score history of {} value(s) has no spread; all bounds collapse to {}",
            summary.count, summary.min
        );
    }

    let results = DriftTestKind::ALL
        .iter()
        .map(|&kind| {
            let threshold = bound(kind, &summary, direction, thresholds);
            let drifted = direction.is_worse(new_score, threshold);
            debug!(
                test = %kind,
                threshold,
                new_score,
                drifted,
                "Evaluated drift test"
            );
            DriftTestResult {
                kind,
                threshold,
                drifted,
            }
        })
        .collect();

    Ok(DriftReport {
        new_score,
        direction,
        thresholds,
        summary,
        results,
    })
}

fn bound(
    kind: DriftTestKind,
    summary: &Summary,
    direction: Direction,
    thresholds: DriftThresholds,
) -> f64 {
    let spread_std = thresholds.std_multiplier * summary.std_dev;
    let spread_iqr = thresholds.iqr_multiplier * summary.iqr;

    match (kind, direction) {
        (DriftTestKind::Minimum, Direction::HigherIsBetter) => summary.min,
        (DriftTestKind::Minimum, Direction::LowerIsBetter) => summary.max,
        (DriftTestKind::Parametric, Direction::HigherIsBetter) => summary.mean - spread_std,
        (DriftTestKind::Parametric, Direction::LowerIsBetter) => summary.mean + spread_std,
        (DriftTestKind::Iqr, Direction::HigherIsBetter) => summary.q25 - spread_iqr,
        (DriftTestKind::Iqr, Direction::LowerIsBetter) => summary.q75 + spread_iqr,
    }
}
