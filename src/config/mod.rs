//! Project configuration from `distme.toml`.
//!
//! The file is optional. Each section holds overrides for one stage; the
//! stage fills in its own defaults.
//!
//! # Sections
//!
//! | Section      | Purpose                                  |
//! |--------------|------------------------------------------|
//! | `[css]`      | Style pipeline paths and explicit files  |
//! | `[js]`       | Script pipeline paths and explicit files |
//! | `[postdist]` | Dist directory, manifest, toggles        |
//!
//! # Example
//!
//! ```toml
//! [css]
//! source_dir = "styles"
//!
//! [js]
//! files = ["src/js/vendor.js", "src/js/app.js"]
//!
//! [postdist]
//! dist_dir = "public"
//! update_version = false
//! ```

mod error;

pub use error::ConfigError;

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::asset::BundleOptions;
use crate::postdist::PostDistOptions;
use crate::{debug, log};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "distme.toml";

/// Root configuration structure representing distme.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DistConfig {
    /// Style pipeline overrides
    #[serde(default)]
    pub css: BundleOptions,

    /// Script pipeline overrides
    #[serde(default)]
    pub js: BundleOptions,

    /// Post-distribution overrides
    #[serde(default)]
    pub postdist: PostDistOptions,
}

impl DistConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults. Unknown keys are reported and
    /// ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("config"; "{} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(ConfigError::Io(path.to_path_buf(), err)),
        };

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }
}

impl FromStr for DistConfig {
    type Err = ConfigError;

    /// Parse configuration from TOML string, ignoring unknown fields.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse_with_ignored(content)
            .map(|(config, _)| config)
            .map_err(|err| ConfigError::Toml(PathBuf::from(DEFAULT_CONFIG_FILE), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!("".parse::<DistConfig>().unwrap(), DistConfig::default());
    }

    #[test]
    fn test_sections() {
        let config: DistConfig = r#"
            [css]
            source_dir = "styles"
            output_file = "app.min.css"

            [js]
            files = ["vendor.js", "app.js"]

            [postdist]
            dist_dir = "public"
            add_timestamp = false
            "#
        .parse()
        .unwrap();

        assert_eq!(config.css.source_dir, Some(PathBuf::from("styles")));
        assert_eq!(config.css.output_file.as_deref(), Some("app.min.css"));
        assert_eq!(
            config.js.files,
            Some(vec![PathBuf::from("vendor.js"), PathBuf::from("app.js")])
        );
        assert_eq!(config.postdist.dist_dir, Some(PathBuf::from("public")));
        assert_eq!(config.postdist.add_timestamp, Some(false));
        assert_eq!(config.postdist.update_version, None);
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) =
            DistConfig::parse_with_ignored("[css]\nsrc = \"x\"\n[extra]\nkey = 1").unwrap();
        assert_eq!(config, DistConfig::default());
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|f| f == "css.src"));
        assert!(ignored.iter().any(|f| f == "extra"));
    }

    #[test]
    fn test_invalid_type_is_error() {
        let result = "[postdist]\nupdate_version = \"yes\"".parse::<DistConfig>();
        assert!(matches!(result, Err(ConfigError::Toml(..))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DistConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, DistConfig::default());
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[js]\ndest_dir = \"out/js\"").unwrap();

        let config = DistConfig::load(&path).unwrap();
        assert_eq!(config.js.dest_dir, Some(PathBuf::from("out/js")));
    }
}
