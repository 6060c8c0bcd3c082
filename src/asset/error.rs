//! Bundling error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the CSS and JavaScript bundling stages.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to create destination directory `{0}`")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("failed to read source directory `{0}`")]
    ReadDir(PathBuf, #[source] io::Error),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),

    #[error("failed to remove temporary file `{0}`")]
    Remove(PathBuf, #[source] io::Error),

    #[error("error minifying JavaScript: {0}")]
    MinifyJs(String),

    #[error("error minifying CSS: {0}")]
    MinifyCss(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn test_bundle_error_display() {
        let err = BundleError::ReadDir(
            PathBuf::from("src/css"),
            io::Error::new(ErrorKind::NotFound, "no such directory"),
        );
        assert!(err.to_string().contains("src/css"));
        assert!(err.source().is_some());

        let err = BundleError::MinifyJs("Unexpected token".into());
        assert_eq!(err.to_string(), "error minifying JavaScript: Unexpected token");
    }
}
