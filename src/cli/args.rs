//! CLI argument parsing.
//!
//! Hand-rolled parser over any iterator of strings so parsing logic is
//! testable without touching the process environment.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate the persisted RNG statuses.
    Generate {
        /// Optional configuration YAML path.
        config_path: Option<PathBuf>,
        /// Optional seed override.
        seed_override: Option<u64>,
    },
    /// Run the replicated estimation and report.
    Run {
        /// Optional configuration YAML path.
        config_path: Option<PathBuf>,
        /// Emit the report as JSON instead of the human-readable layout.
        json: bool,
    },
    /// Malformed invocation; carries the diagnostic and exits non-zero.
    Invalid {
        /// What was wrong with the invocation.
        message: String,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "generate" => Self::parse_generate_command(args),
            "run" => Self::parse_run_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => Command::Invalid {
                message: format!("unknown command: {unknown}"),
            },
        };

        Self { command }
    }

    fn parse_generate_command(args: &[String]) -> Command {
        let mut config_path = None;
        let mut seed_override = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if let Some(value) = args.get(i + 1) {
                        seed_override = value.parse::<u64>().ok();
                        if seed_override.is_none() {
                            return Command::Invalid {
                                message: format!("invalid seed value: {value}"),
                            };
                        }
                        i += 2;
                    } else {
                        return Command::Invalid {
                            message: "--seed requires a value".to_string(),
                        };
                    }
                }
                other => {
                    config_path = Some(PathBuf::from(other));
                    i += 1;
                }
            }
        }

        Command::Generate {
            config_path,
            seed_override,
        }
    }

    fn parse_run_command(args: &[String]) -> Command {
        let mut config_path = None;
        let mut json = false;

        for arg in &args[2..] {
            match arg.as_str() {
                "--json" => json = true,
                other => config_path = Some(PathBuf::from(other)),
            }
        }

        Command::Run { config_path, json }
    }
}
