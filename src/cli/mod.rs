//! Command-line interface: argument parsing, command execution, and
//! report formatting.

pub mod args;
pub mod output;

use std::path::Path;
use std::process::ExitCode;
use tracing::error;

use crate::config::Config;
use crate::engine::orchestrator::Orchestrator;
use crate::engine::status::StatusGenerator;
use crate::error::PimcResult;

pub use args::{Args, Command};

/// Parse arguments from the environment and execute.
#[must_use]
pub fn run() -> ExitCode {
    execute(&Args::parse())
}

/// Execute a parsed command.
#[must_use]
pub fn execute(args: &Args) -> ExitCode {
    let result = match &args.command {
        Command::Generate {
            config_path,
            seed_override,
        } => cmd_generate(config_path.as_deref(), *seed_override),
        Command::Run { config_path, json } => cmd_run(config_path.as_deref(), *json),
        Command::Invalid { message } => {
            eprintln!("error: {message}");
            eprintln!("run 'pimc help' for usage");
            return ExitCode::FAILURE;
        }
        Command::Help => {
            output::print_help();
            Ok(())
        }
        Command::Version => {
            output::print_version();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> PimcResult<Config> {
    path.map_or_else(|| Ok(Config::default()), Config::load)
}

fn cmd_generate(config_path: Option<&Path>, seed_override: Option<u64>) -> PimcResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(seed) = seed_override {
        config.seed = seed;
    }

    StatusGenerator::new(config).generate()
}

fn cmd_run(config_path: Option<&Path>, json: bool) -> PimcResult<()> {
    let config = load_config(config_path)?;
    let report = Orchestrator::new(config).run()?;
    if json {
        output::print_report_json(&report)?;
    } else {
        output::print_report(&report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::ExitCode;

    #[test]
    fn test_help_and_version_succeed() {
        let help = execute(&Args {
            command: Command::Help,
        });
        assert_eq!(format!("{help:?}"), format!("{:?}", ExitCode::SUCCESS));

        let version = execute(&Args {
            command: Command::Version,
        });
        assert_eq!(format!("{version:?}"), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn test_run_with_missing_config_fails() {
        let code = execute(&Args {
            command: Command::Run {
                config_path: Some("does-not-exist.yaml".into()),
                json: false,
            },
        });
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn test_invalid_invocation_exits_nonzero() {
        let code = execute(&Args::parse_from(["pimc", "frobnicate"]));
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));

        let code = execute(&Args::parse_from(["pimc", "generate", "--seed", "banana"]));
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));

        let code = execute(&Args::parse_from(["pimc", "generate", "--seed"]));
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn test_generate_then_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("exp.yaml");
        let status_dir = dir.path().join("status");
        std::fs::write(
            &config_path,
            format!(
                "seed: 42\nreplicates: 3\npoints: 500\nstatus_dir: {}\n",
                status_dir.display()
            ),
        )
        .unwrap();

        let generated = execute(&Args {
            command: Command::Generate {
                config_path: Some(config_path.clone()),
                seed_override: None,
            },
        });
        assert_eq!(
            format!("{generated:?}"),
            format!("{:?}", ExitCode::SUCCESS)
        );

        let ran = execute(&Args {
            command: Command::Run {
                config_path: Some(config_path.clone()),
                json: false,
            },
        });
        assert_eq!(format!("{ran:?}"), format!("{:?}", ExitCode::SUCCESS));

        let ran_json = execute(&Args {
            command: Command::Run {
                config_path: Some(config_path),
                json: true,
            },
        });
        assert_eq!(format!("{ran_json:?}"), format!("{:?}", ExitCode::SUCCESS));
    }
}
