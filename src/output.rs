// src/output.rs
// Writing the generated file: atomic replace, skip when unchanged, check mode

use crate::error::{Result, StdpkgsError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Default output file name, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "stdpkgs.go";

/// What happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was created or replaced
    Written,
    /// Existing file already had identical content
    Unchanged,
}

/// Write `content` to `path` unless it already holds exactly that content.
///
/// The new content goes to a sibling temp file first and is renamed over
/// `path`, so a failed run never leaves a half-written output behind.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    if let Ok(existing) = fs::read(path) {
        if existing == content.as_bytes() {
            info!("Not writing {}: no change", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
    }

    let temp_path = temp_path_for(path);
    let written = fs::File::create(&temp_path).and_then(|mut f| {
        f.write_all(content.as_bytes())?;
        f.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(StdpkgsError::io(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(StdpkgsError::io(path, e));
    }

    info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(WriteOutcome::Written)
}

/// Verify that `path` already holds `content`.
///
/// Fails with [`StdpkgsError::Stale`] when the file is missing or differs.
pub fn check_up_to_date(path: &Path, content: &str) -> Result<()> {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            info!("{} is up to date", path.display());
            Ok(())
        }
        Ok(_) => Err(StdpkgsError::Stale(path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(StdpkgsError::Stale(path.to_path_buf()))
        }
        Err(e) => Err(StdpkgsError::io(path, e)),
    }
}

fn temp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_OUTPUT.into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ============================================================================
    // write_if_changed tests
    // ============================================================================

    #[test]
    fn test_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);

        let outcome = write_if_changed(&path, "package filters\n").unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package filters\n");
        assert!(!temp_dir.path().join("stdpkgs.go.tmp").exists());
    }

    #[test]
    fn test_write_overwrites_fully() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        fs::write(&path, "a much longer previous content that must vanish\n").unwrap();

        write_if_changed(&path, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        fs::write(&path, "same\n").unwrap();

        let outcome = write_if_changed(&path, "same\n").unwrap();
        assert_eq!(outcome, WriteOutcome::Unchanged);
    }

    #[test]
    fn test_write_into_missing_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join(DEFAULT_OUTPUT);

        let err = write_if_changed(&path, "x").unwrap_err();
        assert!(matches!(err, StdpkgsError::Io { .. }));
        assert!(!path.exists());
    }

    // ============================================================================
    // check_up_to_date tests
    // ============================================================================

    #[test]
    fn test_check_fresh_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        fs::write(&path, "fresh\n").unwrap();
        assert!(check_up_to_date(&path, "fresh\n").is_ok());
    }

    #[test]
    fn test_check_stale_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_OUTPUT);
        fs::write(&path, "old\n").unwrap();
        let err = check_up_to_date(&path, "new\n").unwrap_err();
        assert!(matches!(err, StdpkgsError::Stale(_)));
        // check mode never writes
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
    }

    #[test]
    fn test_check_missing_file_is_stale() {
        let temp_dir = TempDir::new().unwrap();
        let err = check_up_to_date(&temp_dir.path().join(DEFAULT_OUTPUT), "x").unwrap_err();
        assert!(matches!(err, StdpkgsError::Stale(_)));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/work/gen/stdpkgs.go");
        assert_eq!(temp_path_for(path), Path::new("/work/gen/stdpkgs.go.tmp"));
    }
}
