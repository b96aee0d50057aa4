use serde::{Deserialize, Serialize};
use std::fmt;

use super::{detector::DriftThresholds, Direction};
use crate::stats::Summary;

/// The three drift heuristics, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftTestKind {
    Minimum,
    Parametric,
    Iqr,
}

impl DriftTestKind {
    pub const ALL: [DriftTestKind; 3] = [Self::Minimum, Self::Parametric, Self::Iqr];

    /// Short human label, adjusted for direction (minimum vs maximum).
    pub fn label(self, direction: Direction) -> &'static str {
        match (self, direction) {
            (Self::Minimum, Direction::HigherIsBetter) => "minimum",
            (Self::Minimum, Direction::LowerIsBetter) => "maximum",
            (Self::Parametric, _) => "mean/std",
            (Self::Iqr, _) => "iqr",
        }
    }
}

impl fmt::Display for DriftTestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimum => "minimum",
            Self::Parametric => "parametric",
            Self::Iqr => "iqr",
        };
        write!(f, "{name}")
    }
}

/// Outcome of a single heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftTestResult {
    pub kind: DriftTestKind,
    /// Bound the new score was compared against
    pub threshold: f64,
    pub drifted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    pub new_score: f64,
    pub direction: Direction,
    pub thresholds: DriftThresholds,
    pub summary: Summary,
    /// Always in [`DriftTestKind::ALL`] order
    pub results: Vec<DriftTestResult>,
}

impl DriftReport {
    pub fn any_drift(&self) -> bool {
        self.results.iter().any(|r| r.drifted)
    }

    pub fn drift_count(&self) -> usize {
        self.results.iter().filter(|r| r.drifted).count()
    }

    pub fn result(&self, kind: DriftTestKind) -> Option<&DriftTestResult> {
        self.results.iter().find(|r| r.kind == kind)
    }
}
