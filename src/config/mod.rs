//! Configuration loading and precedence.
//!
//! Values come from three layers, highest priority first: command-line
//! flags, the nearest `.scoredrift.toml`, built-in defaults.

mod core;
mod loader;

pub use self::core::{OutputConfig, ScoredriftConfig, ScoresConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME, DEFAULT_CONFIG,
};

use std::path::PathBuf;

use crate::drift::{Direction, DriftThresholds};
use crate::output::OutputFormat;
use crate::scores::DEFAULT_SCORES_FILE;

/// Flag values supplied on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub scores: Option<PathBuf>,
    pub direction: Option<Direction>,
    pub std_multiplier: Option<f64>,
    pub iqr_multiplier: Option<f64>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for a drift run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub scores: PathBuf,
    pub direction: Direction,
    pub thresholds: DriftThresholds,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(config: &ScoredriftConfig, overrides: Overrides) -> Self {
        let file_thresholds = config.thresholds();
        Self {
            scores: overrides
                .scores
                .or_else(|| config.scores_path().cloned())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_FILE)),
            direction: overrides
                .direction
                .or(config.direction())
                .unwrap_or_default(),
            thresholds: DriftThresholds {
                std_multiplier: overrides
                    .std_multiplier
                    .unwrap_or(file_thresholds.std_multiplier),
                iqr_multiplier: overrides
                    .iqr_multiplier
                    .unwrap_or(file_thresholds.iqr_multiplier),
            },
            format: overrides
                .format
                .or(config.default_format())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_config_or_flags() {
        let settings = Settings::resolve(&ScoredriftConfig::default(), Overrides::default());
        assert_eq!(
            settings,
            Settings {
                scores: PathBuf::from("previousscores.txt"),
                direction: Direction::HigherIsBetter,
                thresholds: DriftThresholds::default(),
                format: OutputFormat::Plain,
            }
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        let settings = Settings::resolve(
            &config,
            Overrides {
                scores: Some(PathBuf::from("mse_history.txt")),
                direction: Some(Direction::LowerIsBetter),
                std_multiplier: Some(3.0),
                iqr_multiplier: None,
                format: Some(OutputFormat::Json),
            },
        );

        assert_eq!(settings.scores, PathBuf::from("mse_history.txt"));
        assert_eq!(settings.direction, Direction::LowerIsBetter);
        assert_eq!(settings.thresholds.std_multiplier, 3.0);
        assert_eq!(settings.thresholds.iqr_multiplier, 1.5);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let config = parse_and_validate_config(
            "[thresholds]\niqr_multiplier = 3.0\n[output]\ndefault_format = \"markdown\"\n",
        )
        .unwrap();
        let settings = Settings::resolve(&config, Overrides::default());
        assert_eq!(settings.thresholds.iqr_multiplier, 3.0);
        assert_eq!(settings.format, OutputFormat::Markdown);
    }
}
