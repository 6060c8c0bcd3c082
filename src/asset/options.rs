//! Bundle configuration: caller overrides merged onto per-kind defaults.
//!
//! # Defaults
//!
//! | Field         | CSS               | JS             |
//! |---------------|-------------------|----------------|
//! | `source_dir`  | `src/css`         | `src/js`       |
//! | `dest_dir`    | `dist/css`        | `dist/js`      |
//! | `temp_file`   | `styles.temp.css` | `main.temp.js` |
//! | `output_file` | `styles.min.css`  | `main.min.js`  |
//! | `files`       | discover          | discover       |
//!
//! # Example
//!
//! ```toml
//! [css]
//! source_dir = "styles"
//! files = ["styles/reset.css", "styles/app.css"]
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use super::AssetKind;

/// Caller-supplied overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BundleOptions {
    /// Directory scanned for sources when `files` is absent.
    pub source_dir: Option<PathBuf>,
    /// Directory receiving the intermediate and final files.
    pub dest_dir: Option<PathBuf>,
    /// Name of the unminified intermediate file inside `dest_dir`.
    pub temp_file: Option<String>,
    /// Name of the minified output file inside `dest_dir`.
    pub output_file: Option<String>,
    /// Explicit ordered input list. Bypasses discovery and the minified
    /// filter; the caller is trusted to exclude `.min` artifacts.
    pub files: Option<Vec<PathBuf>>,
}

/// Fully resolved configuration for one bundling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub temp_file: String,
    pub output_file: String,
    pub files: Option<Vec<PathBuf>>,
}

impl BundleOptions {
    /// Merge these overrides onto the defaults for `kind`.
    pub fn resolve(self, kind: AssetKind) -> BundleConfig {
        BundleConfig {
            source_dir: self
                .source_dir
                .unwrap_or_else(|| kind.default_source_dir().into()),
            dest_dir: self
                .dest_dir
                .unwrap_or_else(|| kind.default_dest_dir().into()),
            temp_file: self
                .temp_file
                .unwrap_or_else(|| kind.default_temp_file().into()),
            output_file: self
                .output_file
                .unwrap_or_else(|| kind.default_output_file().into()),
            files: self.files,
        }
    }
}

impl BundleConfig {
    /// Path of the intermediate concatenated file.
    pub fn temp_path(&self) -> PathBuf {
        self.dest_dir.join(&self.temp_file)
    }

    /// Path of the final minified file.
    pub fn output_path(&self) -> PathBuf {
        self.dest_dir.join(&self.output_file)
    }
}
