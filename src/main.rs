use anyhow::Result;
use clap::Parser;
use scoredrift::cli::{Cli, Commands};
use scoredrift::commands::{self, CheckConfig, StatsConfig};
use scoredrift::config::{self, ScoredriftConfig};
use scoredrift::scores::DEFAULT_SCORES_FILE;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status used by `check --fail-on-drift` when any test fires.
const DRIFT_EXIT_CODE: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = scoredrift::observability::init_logging(cli.verbosity) {
        eprintln!("Warning: {e}");
    }

    let file_config = config::load_config();
    run(cli.command, cli.plain, &file_config)
}

fn run(command: Commands, plain: bool, file_config: &ScoredriftConfig) -> Result<ExitCode> {
    match command {
        Commands::Check {
            scores,
            new_score,
            direction,
            std_multiplier,
            iqr_multiplier,
            format,
            output,
            fail_on_drift,
        } => {
            let check_config = CheckConfig {
                scores,
                new_score,
                direction,
                std_multiplier,
                iqr_multiplier,
                format,
                output,
                plain,
            };
            let report = commands::run_check(check_config, file_config)?;
            Ok(drift_exit_code(fail_on_drift, report.any_drift()))
        }
        Commands::Stats {
            scores,
            format,
            output,
        } => {
            let stats_config = StatsConfig {
                scores,
                format,
                output,
                plain,
            };
            commands::run_stats(stats_config, file_config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Record { scores, new_score } => {
            let path = resolve_scores_path(scores, file_config);
            let history = commands::record_score(&path, new_score)?;
            println!(
                "Recorded {} in {} ({} scores)",
                new_score,
                path.display(),
                history.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            let path = commands::init_config(&std::env::current_dir()?, force)?;
            println!("Created {} configuration file", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_scores_path(flag: Option<PathBuf>, file_config: &ScoredriftConfig) -> PathBuf {
    flag.or_else(|| file_config.scores_path().cloned())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_FILE))
}

fn drift_exit_code(fail_on_drift: bool, drifted: bool) -> ExitCode {
    if fail_on_drift && drifted {
        ExitCode::from(DRIFT_EXIT_CODE)
    } else {
        ExitCode::SUCCESS
    }
}
