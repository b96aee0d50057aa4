use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::drift::{Direction, DriftThresholds};
use crate::output::OutputFormat;

/// Root configuration structure for `.scoredrift.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoredriftConfig {
    /// Drift test multipliers
    #[serde(default)]
    pub thresholds: Option<DriftThresholds>,

    /// Score history location and metric direction
    #[serde(default)]
    pub scores: Option<ScoresConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoresConfig {
    /// Path to the score history, relative to the working directory
    pub path: Option<PathBuf>,
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}

impl ScoredriftConfig {
    pub fn thresholds(&self) -> DriftThresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.scores.as_ref().and_then(|s| s.direction)
    }

    pub fn scores_path(&self) -> Option<&PathBuf> {
        self.scores.as_ref().and_then(|s| s.path.as_ref())
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }
}
