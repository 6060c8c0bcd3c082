//! Ordered concatenation of source files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::BundleError;

/// Append the bytes of each file in `files`, in order, into `dest`.
///
/// `dest` is truncated first. No separator is inserted between files.
/// Returns the number of bytes written.
pub fn concat_files(files: &[PathBuf], dest: &Path) -> Result<u64, BundleError> {
    let write_err = |err: io::Error| BundleError::Write(dest.to_path_buf(), err);

    let mut out = BufWriter::new(File::create(dest).map_err(write_err)?);
    let mut total = 0;

    for path in files {
        let mut input = File::open(path).map_err(|err| BundleError::Read(path.clone(), err))?;
        total += io::copy(&mut input, &mut out).map_err(|err| {
            // io::copy does not say which side failed; blame the reader
            // unless the writer is already unusable.
            match err.kind() {
                io::ErrorKind::WriteZero | io::ErrorKind::StorageFull => write_err(err),
                _ => BundleError::Read(path.clone(), err),
            }
        })?;
    }

    out.flush().map_err(write_err)?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_concat_preserves_order_and_bytes() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.js");
        let b = dir.path().join("b.js");
        let c = dir.path().join("c.js");
        fs::write(&a, "var a = 1;").unwrap();
        fs::write(&b, "\n// no trailing newline").unwrap();
        fs::write(&c, "var c = 3;\n").unwrap();

        let dest = dir.path().join("out.js");
        let written = concat_files(&[c.clone(), a.clone(), b.clone()], &dest).unwrap();

        let expected = "var c = 3;\nvar a = 1;\n// no trailing newline";
        assert_eq!(fs::read_to_string(&dest).unwrap(), expected);
        assert_eq!(written, expected.len() as u64);
    }

    #[test]
    fn test_concat_truncates_existing_dest() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.css");
        fs::write(&src, "a{}").unwrap();
        let dest = dir.path().join("out.css");
        fs::write(&dest, "stale content that is longer").unwrap();

        concat_files(&[src], &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "a{}");
    }

    #[test]
    fn test_concat_missing_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.css");
        let err = concat_files(&[missing.clone()], &dir.path().join("out.css")).unwrap_err();
        assert!(matches!(err, BundleError::Read(path, _) if path == missing));
    }
}
