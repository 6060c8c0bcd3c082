//! Distme - distribution utilities for frontend projects.
//!
//! Three independent stages:
//!
//! | Stage        | Entry point      | Output                          |
//! |--------------|------------------|---------------------------------|
//! | style        | [`concat_css`]   | `dist/css/styles.min.css`       |
//! | script       | [`concat_js`]    | `dist/js/main.min.js`           |
//! | post-dist    | [`post_dist`]    | `dist/index.html`, `version.json` |
//!
//! ```ignore
//! distme::concat_css(distme::BundleOptions::default())?;
//! distme::post_dist(distme::PostDistOptions {
//!     add_timestamp: Some(false),
//!     ..Default::default()
//! })?;
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod logger;
pub mod postdist;
pub mod utils;

pub use asset::{AssetKind, BundleError, BundleOptions, concat_css, concat_js};
pub use config::{ConfigError, DistConfig};
pub use postdist::{
    Clock, FixedClock, PostDistError, PostDistOptions, SystemClock, VersionManifest, post_dist,
    post_dist_with_clock,
};
