//! Distme - concatenate, minify and stamp frontend builds.

use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use distme::cli::{Cli, dispatch};
use distme::config::DistConfig;
use distme::{log, logger};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let command = match cli.require_command() {
        Ok(command) => command,
        Err(err) => err.exit(),
    };

    let config = match DistConfig::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            log!("error"; "{:#}", anyhow::Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    // Stages log their own failures before returning them
    match dispatch(command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
