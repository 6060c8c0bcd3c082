//! Command-line interface module.

mod args;

pub use args::{Cli, Commands};

use anyhow::Result;

use crate::asset::{AssetKind, run_bundle};
use crate::config::DistConfig;
use crate::log;
use crate::postdist::post_dist;

/// Run one command against a loaded configuration.
pub fn dispatch(command: Commands, config: DistConfig) -> Result<()> {
    log!("distme"; "{}", command.banner());
    match command {
        Commands::Css => run_bundle(AssetKind::Css, config.css),
        Commands::Js => run_bundle(AssetKind::Js, config.js),
        Commands::Pd => post_dist(config.postdist),
    }
}
