//! Drift detection over score histories.
//!
//! Three heuristics compare a new score against the history:
//!
//! - **Minimum**: the new score falls outside the range ever observed
//! - **Parametric**: the new score lies more than `k` standard deviations
//!   beyond the mean
//! - **IQR**: the new score lies more than `m` interquartile ranges beyond
//!   the near quartile
//!
//! Which side counts as "beyond" depends on [`Direction`]. All comparisons
//! are strict, so a score exactly on a bound is not drift.

pub mod detector;
pub mod report;

pub use detector::{detect, DriftThresholds};
pub use report::{DriftReport, DriftTestKind, DriftTestResult};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way a metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Direction {
    /// Larger is better (R², accuracy, F1); drift is a drop
    #[default]
    #[serde(rename = "higher")]
    #[value(name = "higher")]
    HigherIsBetter,
    /// Smaller is better (MSE, SSE); drift is a rise
    #[serde(rename = "lower")]
    #[value(name = "lower")]
    LowerIsBetter,
}

impl Direction {
    /// True when `score` is strictly worse than `bound`.
    pub fn is_worse(self, score: f64, bound: f64) -> bool {
        match self {
            Self::HigherIsBetter => score < bound,
            Self::LowerIsBetter => score > bound,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HigherIsBetter => write!(f, "higher is better"),
            Self::LowerIsBetter => write!(f, "lower is better"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_worse_is_strict() {
        assert!(Direction::HigherIsBetter.is_worse(0.1, 0.2));
        assert!(!Direction::HigherIsBetter.is_worse(0.2, 0.2));
        assert!(Direction::LowerIsBetter.is_worse(0.3, 0.2));
        assert!(!Direction::LowerIsBetter.is_worse(0.2, 0.2));
    }

    #[test]
    fn test_direction_deserializes_from_short_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            direction: Direction,
        }
        let w: Wrapper = toml::from_str("direction = \"lower\"").unwrap();
        assert_eq!(w.direction, Direction::LowerIsBetter);
        assert_eq!(Direction::default(), Direction::HigherIsBetter);
    }
}
