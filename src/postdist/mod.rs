//! Post-distribution pass over the generated HTML entrypoint.
//!
//! ```text
//! package.json ──version──┐
//!                         ▼
//! dist/index.html ─▶ rewrite refs ─▶ {{VERSION}} ─▶ {{BUILD_TIME}} ─▶ dist/index.html
//!                                                                   └▶ dist/version.json
//! ```
//!
//! A missing `index.html` is a soft skip: a warning is logged and nothing is
//! written, `version.json` included.
//!
//! # Example
//!
//! ```toml
//! [postdist]
//! dist_dir = "public"
//! add_timestamp = false
//! ```

mod clock;
mod error;
mod manifest;
mod rewrite;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::log;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::PostDistError;
pub use manifest::{
    DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR, VersionManifest, build_environment,
    environment_or_default, read_version,
};
pub use rewrite::{
    BUILD_TIME_PLACEHOLDER, REFERENCE_RULES, VERSION_PLACEHOLDER, inject_build_time,
    inject_version, rewrite_references,
};

const MODULE: &str = "pd";

/// Caller-supplied overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostDistOptions {
    /// Distribution directory holding `index.html` (default: `dist`)
    pub dist_dir: Option<PathBuf>,
    /// Replace `{{VERSION}}` (default: true)
    pub update_version: Option<bool>,
    /// Replace `{{BUILD_TIME}}` (default: true)
    pub add_timestamp: Option<bool>,
    /// Project manifest path, relative to the working directory
    /// (default: `package.json`)
    pub manifest: Option<PathBuf>,
}

/// Fully resolved post-distribution configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDistConfig {
    pub dist_dir: PathBuf,
    pub update_version: bool,
    pub add_timestamp: bool,
    pub manifest: PathBuf,
}

impl PostDistOptions {
    /// Merge these overrides onto the defaults.
    pub fn resolve(self) -> PostDistConfig {
        PostDistConfig {
            dist_dir: self.dist_dir.unwrap_or_else(|| "dist".into()),
            update_version: self.update_version.unwrap_or(true),
            add_timestamp: self.add_timestamp.unwrap_or(true),
            manifest: self.manifest.unwrap_or_else(|| "package.json".into()),
        }
    }
}

impl PostDistConfig {
    pub fn html_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn version_path(&self) -> PathBuf {
        self.dist_dir.join("version.json")
    }
}

/// Run post-distribution tasks against the wall clock.
pub fn post_dist(options: PostDistOptions) -> Result<()> {
    post_dist_with_clock(options, &SystemClock)
}

/// Run post-distribution tasks with an explicit time source.
pub fn post_dist_with_clock(options: PostDistOptions, clock: &dyn Clock) -> Result<()> {
    let config = options.resolve();
    match run(&config, clock, build_environment()) {
        Ok(_) => Ok(()),
        Err(err) => {
            let err = anyhow::Error::from(err).context("error running post-distribution tasks");
            log!("error"; "{:#}", err);
            Err(err)
        }
    }
}

/// Run the post-distribution steps in order.
///
/// Returns the written manifest, or `None` if `index.html` was absent.
pub fn run(
    config: &PostDistConfig,
    clock: &dyn Clock,
    environment: String,
) -> Result<Option<VersionManifest>, PostDistError> {
    let version = read_version(&config.manifest)?;
    log!(MODULE; "running post-distribution tasks for version {}", version);

    let html_path = config.html_path();
    if !html_path.exists() {
        log!("warning"; "HTML file not found at {}", html_path.display());
        return Ok(None);
    }

    let bytes = fs::read(&html_path).map_err(|err| PostDistError::Read(html_path.clone(), err))?;
    let mut html = rewrite_references(&String::from_utf8_lossy(&bytes));

    if config.update_version {
        html = inject_version(&html, &version);
        log!(MODULE; "updated version to {}", version);
    }

    if config.add_timestamp {
        let timestamp = clock.now().to_iso8601();
        html = inject_build_time(&html, &timestamp);
        log!(MODULE; "added build timestamp: {}", timestamp);
    }

    fs::write(&html_path, html).map_err(|err| PostDistError::Write(html_path.clone(), err))?;
    log!(MODULE; "updated HTML file at {}", html_path.display());

    // Captured again rather than reusing the HTML timestamp.
    let manifest = VersionManifest {
        version,
        build_timestamp: clock.now().to_iso8601(),
        build_environment: environment,
    };
    manifest.write(&config.version_path())?;

    log!(MODULE; "post-distribution tasks completed successfully");
    Ok(Some(manifest))
}
