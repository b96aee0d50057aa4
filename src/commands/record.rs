use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::scores::ScoreHistory;

/// Append `score` to the history at `path`, creating the file if needed.
///
/// Returns the updated history.
pub fn record_score(path: &Path, score: f64) -> Result<ScoreHistory> {
    let mut history = ScoreHistory::read_or_default(path)
        .with_context(|| format!("Reading score history {}", path.display()))?;
    history.push(score)?;
    history
        .save(path)
        .with_context(|| format!("Saving score history {}", path.display()))?;

    info!(
        "Recorded score {} in {} ({} scores)",
        score,
        path.display(),
        history.len()
    );
    Ok(history)
}
