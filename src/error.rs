// src/error.rs
// Standardized error types for stdpkgs

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the stdpkgs library
#[derive(Error, Debug)]
pub enum StdpkgsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not determine GOROOT: {0}")]
    GorootNotFound(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("formatter failed: {0}")]
    Format(String),

    #[error("{} is out of date; rerun stdpkgs to regenerate it", .0.display())]
    Stale(PathBuf),
}

/// Convenience type alias for Result using StdpkgsError
pub type Result<T> = std::result::Result<T, StdpkgsError>;

impl StdpkgsError {
    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StdpkgsError::Io {
            path: path.into(),
            source,
        }
    }
}
