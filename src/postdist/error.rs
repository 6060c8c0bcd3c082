//! Post-distribution error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the post-distribution pass.
#[derive(Debug, Error)]
pub enum PostDistError {
    #[error("failed to read project manifest `{0}`")]
    ReadManifest(PathBuf, #[source] io::Error),

    #[error("failed to parse project manifest `{0}`")]
    ParseManifest(PathBuf, #[source] serde_json::Error),

    #[error("project manifest `{0}` has no `version` field")]
    MissingVersion(PathBuf),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),

    #[error("failed to serialize version manifest")]
    Serialize(#[from] serde_json::Error),
}
