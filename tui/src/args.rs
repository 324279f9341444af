use ca1d_lib::{AutomatonKind, Config};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use std::{fmt::Display, path::PathBuf};

/// A simple tool to simulate one-dimensional, two-state cellular automata.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print the rule table after the evolution.
    #[arg(long, global = true)]
    pub rule_table: bool,

    /// Write the evolution to a file instead of the standard output.
    ///
    /// In the interactive viewer, press [w] to write the evolution to this file.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Whether to open the interactive viewer.
    ///
    /// If the standard output is not a terminal, the evolution is printed instead.
    #[arg(long, global = true)]
    pub tui: bool,

    /// Number of generations computed at each tick when the viewer is running.
    #[arg(long, global = true)]
    pub step: Option<usize>,

    /// A path to save the session of the interactive viewer.
    ///
    /// Press [s] in the viewer to save. The session can be resumed with the `resume` command.
    #[arg(long, global = true)]
    pub save: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new automaton from the command line arguments.
    ///
    /// With `--random`, the initial generation may be omitted.
    #[command(allow_missing_positional = true)]
    New(NewArgs),
    /// Load an automaton from a saved state file.
    ///
    /// The first line of the file is the rule number, the second line is the false symbol
    /// immediately followed by the true symbol, and the third line is the initial generation.
    Load(LoadArgs),
    /// Resume a session saved by the interactive viewer.
    Resume(ResumeArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub config: Config,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Type of the cellular automaton, `ECA` or `TCA` (case-insensitive).
    #[arg(value_enum, ignore_case = true)]
    pub kind: AutomatonKind,

    /// Path to the saved state file.
    pub path: PathBuf,

    /// Number of evolution steps.
    #[arg(short = 'n', long, default_value = "0", allow_negative_numbers = true)]
    pub steps: isize,
}

#[derive(Debug, Args)]
pub struct ResumeArgs {
    /// Path to the saved session.
    pub path: PathBuf,
}

impl Cli {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let cli = Self::parse();

        if cli.step == Some(0) {
            Self::exit_with_error("step must be > 0");
        }

        if let Command::New(args) = &cli.command {
            if let Err(e) = args.config.clone().check() {
                Self::exit_with_error(e);
            }
        }

        cli
    }

    /// Print an error message with the usage, and exit.
    pub fn exit_with_error(message: impl Display) -> ! {
        Self::command()
            .error(ErrorKind::ValueValidation, message)
            .exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_new(args: &[&str]) -> Config {
        match Cli::try_parse_from(args.iter().copied()).unwrap().command {
            Command::New(args) => args.config,
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn test_command() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_new() {
        let config = parse_new(&["ca1d", "new", "eca", "90", ".", "#", "..#..", "3"]);
        assert_eq!(config.kind, AutomatonKind::Elementary);
        assert_eq!(config.initial, "..#..");
        assert_eq!(config.steps, 3);
        assert_eq!(config.random, None);
    }

    #[test]
    fn test_new_random_without_initial() {
        let config = parse_new(&["ca1d", "new", "TCA", "20", "0", "1", "10", "--random", "64"]);
        assert_eq!(config.kind, AutomatonKind::Totalistic);
        assert_eq!(config.initial, "");
        assert_eq!(config.steps, 10);
        assert_eq!(config.random, Some(64));

        let config = parse_new(&["ca1d", "new", "TCA", "20", "0", "1", "010", "10", "-r", "8"]);
        assert_eq!(config.initial, "010");
        assert_eq!(config.steps, 10);
    }

    #[test]
    fn test_new_requires_initial() {
        assert!(Cli::try_parse_from(["ca1d", "new", "ECA", "90", "0", "1", "10"]).is_err());
    }
}
