//! Command-line interface definitions.

use clap::error::ErrorKind;
use clap::{ColorChoice, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Distribution utilities for frontend projects
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (optional, defaults apply when absent)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, or a usage error when none was given.
    pub fn require_command(&self) -> Result<Commands, clap::Error> {
        self.command.ok_or_else(|| {
            Self::command().error(ErrorKind::MissingSubcommand, "at least one command required")
        })
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Concatenate CSS files
    Css,

    /// Concatenate JavaScript files
    Js,

    /// Run post-distribution tasks
    Pd,
}

impl Commands {
    /// Banner printed before the stage runs.
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Css => "concatenating CSS files...",
            Self::Js => "concatenating JavaScript files...",
            Self::Pd => "running post-distribution tasks...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_commands() {
        let parse = |name| {
            Cli::try_parse_from(["distme", name]).unwrap().require_command().unwrap()
        };
        assert_eq!(parse("css"), Commands::Css);
        assert_eq!(parse("js"), Commands::Js);
        assert_eq!(parse("pd"), Commands::Pd);
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from(["distme", "pd", "-C", "build.toml", "--verbose"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("build.toml"));
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["distme", "css"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_command_required() {
        let cases: [&[&str]; 2] = [&["distme"], &["distme", "--verbose"]];
        for args in cases {
            let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
            let err = cli.require_command().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingSubcommand);
            assert!(err.to_string().contains("at least one command required"));
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!(Cli::try_parse_from(["distme", "html"]).is_err());
    }
}
