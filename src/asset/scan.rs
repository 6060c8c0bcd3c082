//! Source discovery (pure, no side effects).

use std::path::{Path, PathBuf};

use super::{AssetKind, BundleConfig, BundleError};

/// Resolve the ordered input list for a bundling run.
///
/// An explicit `files` list is returned untouched. Otherwise the source
/// directory is scanned with [`discover`].
pub fn resolve_files(kind: AssetKind, config: &BundleConfig) -> Result<Vec<PathBuf>, BundleError> {
    match &config.files {
        Some(files) => Ok(files.clone()),
        None => discover(kind, &config.source_dir),
    }
}

/// Scan `dir` for bundling candidates
///
/// Returns `dir/<name>` for every entry accepted by [`is_candidate`],
/// ordered by file name so repeated runs concatenate identically.
///
/// # Pure Function
///
/// This function only reads the filesystem and returns data
pub fn discover(kind: AssetKind, dir: &Path) -> Result<Vec<PathBuf>, BundleError> {
    let entries =
        std::fs::read_dir(dir).map_err(|err| BundleError::ReadDir(dir.to_path_buf(), err))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| BundleError::ReadDir(dir.to_path_buf(), err))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_candidate(kind, &name) {
            names.push(name);
        }
    }
    names.sort_unstable();

    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// Whether a file name should be bundled.
///
/// The name must end with the kind's extension and must not contain the
/// minified marker anywhere, so `vendor.min.css.bak.css` is rejected too.
pub fn is_candidate(kind: AssetKind, name: &str) -> bool {
    let suffix = format!(".{}", kind.extension());
    name.ends_with(&suffix) && !name.contains(kind.min_marker())
}
