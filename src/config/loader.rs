use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::ScoredriftConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".scoredrift.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ScoredriftConfig> {
    let config = toml::from_str::<ScoredriftConfig>(contents)?;

    if let Some(thresholds) = &config.thresholds {
        thresholds
            .validate()
            .map_err(|e| Error::Configuration(e.to_string()))?;
    }

    Ok(config)
}

/// Try loading config from a specific path.
///
/// A missing file is silent; unreadable or invalid files are logged and
/// skipped so the search continues with defaults.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ScoredriftConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Generate directory ancestors up to a depth limit, starting with `start`
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file.
pub fn load_config_from(start: PathBuf) -> ScoredriftConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ScoredriftConfig::default()
        })
}

pub fn load_config() -> ScoredriftConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!("Failed to get current directory: {}. Using default config.", e);
            ScoredriftConfig::default()
        }
    }
}

/// Default configuration written by `scoredrift init`.
pub const DEFAULT_CONFIG: &str = r#"# scoredrift configuration

[thresholds]
# Standard deviations below the mean before the parametric test fires
std_multiplier = 2.0
# Interquartile ranges below the first quartile before the IQR test fires
iqr_multiplier = 1.5

[scores]
path = "previousscores.txt"
# "higher" for R2/accuracy/F1, "lower" for MSE/SSE
direction = "higher"

[output]
default_format = "plain"
"#;
