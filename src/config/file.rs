// src/config/file.rs
// File-based configuration from stdpkgs.toml

use crate::error::{Result, StdpkgsError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "stdpkgs.toml";

/// Contents of `stdpkgs.toml`. Every key is optional.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub goroot: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub package: Option<String>,
    pub type_name: Option<String>,
    pub var_name: Option<String>,
    pub placeholder: Option<String>,
    /// Extra source roots walked after `$GOROOT/src`
    pub roots: Vec<PathBuf>,
    /// Extra directory names to skip
    pub skip_dirs: Vec<String>,
    /// Skip v1, v2, ... directories under vendor/ (default true)
    pub skip_major_versions: Option<bool>,
    pub format_command: Option<String>,
    /// Comment lines written above the generated-code marker
    pub header: Vec<String>,
}

impl FileConfig {
    /// Load config from `path`.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(StdpkgsError::io(path, e)),
        };

        let config = Self::parse(&contents).map_err(|source| StdpkgsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config from file");
        Ok(config)
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
