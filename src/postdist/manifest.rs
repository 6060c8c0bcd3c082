//! Project manifest input and version manifest output.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::PostDistError;

/// Environment variable selecting the recorded build environment.
pub const ENVIRONMENT_VAR: &str = "NODE_ENV";

/// Environment recorded when [`ENVIRONMENT_VAR`] is unset or empty.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// The subset of `package.json` this crate reads.
#[derive(Debug, Clone, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Read the `version` field from a project manifest.
pub fn read_version(path: &Path) -> Result<String, PostDistError> {
    let content = fs::read_to_string(path)
        .map_err(|err| PostDistError::ReadManifest(path.to_path_buf(), err))?;
    let manifest: PackageManifest = serde_json::from_str(&content)
        .map_err(|err| PostDistError::ParseManifest(path.to_path_buf(), err))?;
    manifest
        .version
        .ok_or_else(|| PostDistError::MissingVersion(path.to_path_buf()))
}

/// Build record written to `version.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionManifest {
    pub version: String,
    pub build_timestamp: String,
    pub build_environment: String,
}

impl VersionManifest {
    /// Pretty-print to `path`, replacing any previous content.
    pub fn write(&self, path: &Path) -> Result<(), PostDistError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|err| PostDistError::Write(PathBuf::from(path), err))
    }
}

/// Resolve the build environment from the process environment.
pub fn build_environment() -> String {
    environment_or_default(std::env::var(ENVIRONMENT_VAR).ok())
}

/// Fall back to [`DEFAULT_ENVIRONMENT`] for unset or empty values.
pub fn environment_or_default(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{ "name": "site", "version": "2.4.1", "private": true }"#).unwrap();
        assert_eq!(read_version(&path).unwrap(), "2.4.1");
    }

    #[test]
    fn test_read_version_errors() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("nope.json");
        assert!(matches!(
            read_version(&missing),
            Err(PostDistError::ReadManifest(..))
        ));

        let malformed = dir.path().join("bad.json");
        fs::write(&malformed, "{ version: 1.0 ").unwrap();
        assert!(matches!(
            read_version(&malformed),
            Err(PostDistError::ParseManifest(..))
        ));

        let versionless = dir.path().join("empty.json");
        fs::write(&versionless, r#"{ "name": "site" }"#).unwrap();
        assert!(matches!(
            read_version(&versionless),
            Err(PostDistError::MissingVersion(..))
        ));
    }

    #[test]
    fn test_version_manifest_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");
        fs::write(&path, "old content that must disappear entirely").unwrap();

        let manifest = VersionManifest {
            version: "1.0.0".into(),
            build_timestamp: "2024-06-15T14:30:45.123Z".into(),
            build_environment: "staging".into(),
        };
        manifest.write(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"version\": \"1.0.0\",\n  \"buildTimestamp\": \"2024-06-15T14:30:45.123Z\",\n  \"buildEnvironment\": \"staging\"\n}"
        );
    }

    #[test]
    fn test_environment_or_default() {
        assert_eq!(environment_or_default(None), "production");
        assert_eq!(environment_or_default(Some(String::new())), "production");
        assert_eq!(environment_or_default(Some("development".into())), "development");
    }
}
