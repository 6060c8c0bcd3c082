//! Bundling stage: discover, concatenate, minify, clean up.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::utils::plural::plural_count;
use crate::{debug, log};

use super::concat::concat_files;
use super::minify::minify;
use super::scan::resolve_files;
use super::{AssetKind, BundleConfig, BundleError, BundleOptions};

/// Outcome of a bundling run that produced output.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleReport {
    pub files: Vec<PathBuf>,
    pub output: PathBuf,
    pub concatenated_bytes: u64,
    pub minified_bytes: usize,
    /// Whole-percent size reduction
    pub compression: i64,
}

/// Concatenate and minify CSS files.
pub fn concat_css(options: BundleOptions) -> Result<()> {
    run_bundle(AssetKind::Css, options)
}

/// Concatenate and minify JavaScript files.
pub fn concat_js(options: BundleOptions) -> Result<()> {
    run_bundle(AssetKind::Js, options)
}

/// Resolve `options` for `kind` and run the stage, logging any failure.
pub fn run_bundle(kind: AssetKind, options: BundleOptions) -> Result<()> {
    let config = options.resolve(kind);
    match bundle(kind, &config) {
        Ok(_) => Ok(()),
        Err(err) => {
            let err = anyhow::Error::from(err).context(format!("error concatenating {kind} files"));
            log!("error"; "{:#}", err);
            Err(err)
        }
    }
}

/// Run the bundling steps in order.
///
/// Returns `None` when no input files were found. Nothing is written in that
/// case, not even the destination's intermediate file.
pub fn bundle(kind: AssetKind, config: &BundleConfig) -> Result<Option<BundleReport>, BundleError> {
    let module = kind.module();

    fs::create_dir_all(&config.dest_dir)
        .map_err(|err| BundleError::CreateDir(config.dest_dir.clone(), err))?;

    let files = resolve_files(kind, config)?;
    if files.is_empty() {
        log!(module; "no {} files found to concatenate", kind);
        return Ok(None);
    }
    for file in &files {
        debug!(module; "input {}", file.display());
    }

    let temp_path = config.temp_path();
    let concatenated_bytes = concat_files(&files, &temp_path)?;
    log!(
        module;
        "concatenated {} to {}",
        plural_count(files.len(), &format!("{kind} file")),
        temp_path.display()
    );

    // Invalid UTF-8 (e.g. a Latin-1 byte in a comment) is replaced, not fatal.
    let bytes = fs::read(&temp_path).map_err(|err| BundleError::Read(temp_path.clone(), err))?;
    let source = String::from_utf8_lossy(&bytes);
    let minified = minify(kind, &source)?;

    let output = config.output_path();
    fs::write(&output, &minified.code).map_err(|err| BundleError::Write(output.clone(), err))?;
    match kind {
        AssetKind::Css => log!(
            module;
            "minified {} to {} ({}% compression)",
            kind,
            output.display(),
            minified.percent()
        ),
        AssetKind::Js => log!(module; "minified {} to {}", kind, output.display()),
    }

    fs::remove_file(&temp_path).map_err(|err| BundleError::Remove(temp_path.clone(), err))?;
    log!(module; "removed temporary file {}", temp_path.display());

    Ok(Some(BundleReport {
        files,
        output,
        concatenated_bytes,
        minified_bytes: minified.code.len(),
        compression: minified.percent(),
    }))
}
