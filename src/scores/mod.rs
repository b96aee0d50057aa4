//! Historical score storage backed by a plain-text literal list.

pub mod parser;

pub use parser::parse_scores;

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::errors::{Error, Result, ResultExt};
use crate::stats::Summary;

/// Default location of the score history, relative to the working directory.
pub const DEFAULT_SCORES_FILE: &str = "previousscores.txt";

/// Previous evaluation scores in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreHistory {
    scores: Vec<f64>,
}

impl ScoreHistory {
    /// Build a history from already-validated values.
    pub fn new(scores: Vec<f64>) -> Result<Self> {
        if let Some(position) = scores.iter().position(|s| !s.is_finite()) {
            return Err(Error::parse(
                position + 1,
                scores[position].to_string(),
                "scores must be finite",
            ));
        }
        Ok(Self { scores })
    }

    /// Read a history file, allowing an empty list.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = crate::io::read_file(path)?;
        let scores = parse_scores(&contents).context(format!("Parsing {}", path.display()))?;
        debug!("Read {} scores from {}", scores.len(), path.display());
        Ok(Self { scores })
    }

    /// Read a history file that must contain at least one score.
    pub fn load(path: &Path) -> Result<Self> {
        let history = Self::read(path)?;
        if history.is_empty() {
            return Err(Error::EmptyHistory);
        }
        Ok(history)
    }

    /// Like [`ScoreHistory::read`], but a missing file yields an empty history.
    pub fn read_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::read(path)
        } else {
            debug!("No score history at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    pub fn push(&mut self, score: f64) -> Result<()> {
        if !score.is_finite() {
            return Err(Error::invalid_input(format!(
                "cannot record non-finite score {score}"
            )));
        }
        self.scores.push(score);
        Ok(())
    }

    /// Persist the history in bracketed literal form, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            crate::io::ensure_dir(parent)?;
        }
        crate::io::write_file(path, &format!("{}\n", self.to_literal()))
    }

    /// Render as `[a, b, c]` using the shortest round-trip float form.
    pub fn to_literal(&self) -> String {
        let items: Vec<String> = self.scores.iter().map(|s| s.to_string()).collect();
        format!("[{}]", items.join(", "))
    }

    pub fn summary(&self) -> Result<Summary> {
        Summary::from_values(&self.scores)
    }

    pub fn values(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
