use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::drift::Direction;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "scoredrift")]
#[command(about = "Model score drift detector", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colors and unicode symbols
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare a new score against the score history
    Check {
        /// Score history file (defaults to previousscores.txt)
        #[arg(short, long)]
        scores: Option<PathBuf>,

        /// The newly measured score
        #[arg(short, long, allow_hyphen_values = true)]
        new_score: f64,

        /// Whether higher or lower scores are better
        #[arg(short, long, value_enum)]
        direction: Option<Direction>,

        /// Standard deviations from the mean for the parametric test
        #[arg(long)]
        std_multiplier: Option<f64>,

        /// Interquartile ranges beyond the quartile for the IQR test
        #[arg(long)]
        iqr_multiplier: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with status 2 when any test detects drift
        #[arg(long)]
        fail_on_drift: bool,
    },

    /// Summarize the score history
    Stats {
        /// Score history file (defaults to previousscores.txt)
        #[arg(short, long)]
        scores: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append a score to the history file
    Record {
        /// Score history file (defaults to previousscores.txt)
        #[arg(short, long)]
        scores: Option<PathBuf>,

        /// Score to append
        #[arg(short, long, allow_hyphen_values = true)]
        new_score: f64,
    },

    /// Initialize a .scoredrift.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_check_command() {
        let cli = Cli::parse_from([
            "scoredrift",
            "check",
            "--new-score",
            "0.3625",
            "--scores",
            "history.txt",
            "--direction",
            "lower",
            "--format",
            "json",
            "--fail-on-drift",
            "-vv",
        ]);

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Check {
                scores,
                new_score,
                direction,
                format,
                fail_on_drift,
                std_multiplier,
                ..
            } => {
                assert_eq!(scores, Some(PathBuf::from("history.txt")));
                assert_eq!(new_score, 0.3625);
                assert_eq!(direction, Some(Direction::LowerIsBetter));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(fail_on_drift);
                assert_eq!(std_multiplier, None);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_scores() {
        let cli = Cli::parse_from(["scoredrift", "record", "--new-score", "-0.25"]);
        match cli.command {
            Commands::Record { new_score, scores } => {
                assert_eq!(new_score, -0.25);
                assert_eq!(scores, None);
            }
            _ => panic!("Expected Record command"),
        }
    }

    #[test]
    fn test_cli_requires_new_score_for_check() {
        assert!(Cli::try_parse_from(["scoredrift", "check"]).is_err());
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["scoredrift", "init", "--force", "--plain"]);
        assert!(cli.plain);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_parsing_stats_command() {
        let cli = Cli::parse_from(["scoredrift", "stats", "-f", "markdown"]);
        match cli.command {
            Commands::Stats { format, .. } => assert_eq!(format, Some(OutputFormat::Markdown)),
            _ => panic!("Expected Stats command"),
        }
    }
}
