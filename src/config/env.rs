// src/config/env.rs
// Go toolchain discovery: GOROOT and its library source roots

use crate::error::{Result, StdpkgsError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Resolve GOROOT.
///
/// An explicitly configured root wins (CLI flag, `GOROOT` env var or the
/// config file, already merged by the caller). Otherwise the `go` tool on
/// PATH is asked via `go env GOROOT`.
pub fn resolve_goroot(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = configured {
        debug!(goroot = %root.display(), "Using configured GOROOT");
        return Ok(root.to_path_buf());
    }
    let root = go_env_goroot("go")?;
    info!(goroot = %root.display(), "Resolved GOROOT from go env");
    Ok(root)
}

/// Ask a Go toolchain binary for its GOROOT
pub fn go_env_goroot(go: &str) -> Result<PathBuf> {
    let output = Command::new(go)
        .args(["env", "GOROOT"])
        .output()
        .map_err(|e| StdpkgsError::GorootNotFound(format!("failed to run `{go} env GOROOT`: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StdpkgsError::GorootNotFound(format!(
            "`{go} env GOROOT` exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let root = stdout.trim();
    if root.is_empty() {
        return Err(StdpkgsError::GorootNotFound(format!(
            "`{go} env GOROOT` printed nothing"
        )));
    }
    Ok(PathBuf::from(root))
}

/// Library source roots of a Go installation.
///
/// With GOPATH cleared the Go build context only searches `$GOROOT/src`.
pub fn source_dirs(goroot: &Path) -> Vec<PathBuf> {
    vec![goroot.join("src")]
}
