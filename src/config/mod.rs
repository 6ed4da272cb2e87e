// src/config/mod.rs
// Generator configuration: defaults, stdpkgs.toml and CLI overrides merged

pub mod env;
pub mod file;
pub mod ignore;

pub use file::{DEFAULT_CONFIG_FILE, FileConfig};
pub use ignore::SkipRules;

use crate::emit::{self, EmitOptions, literal};
use crate::error::{Result, StdpkgsError};
use crate::output::DEFAULT_OUTPUT;
use std::path::PathBuf;
use tracing::debug;

/// Settings given on the command line (or via env-backed flags).
///
/// `None` / empty means "not given", so the config file or the default
/// applies.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub goroot: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub package: Option<String>,
    pub placeholder: Option<String>,
    pub roots: Vec<PathBuf>,
    pub keep_major_versions: bool,
    pub format_command: Option<String>,
}

/// Fully resolved settings for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Absolute GOROOT; its prefix is replaced by the placeholder on output
    pub goroot: PathBuf,
    /// Source roots to walk, `$GOROOT/src` first
    pub roots: Vec<PathBuf>,
    pub output: PathBuf,
    pub skip: SkipRules,
    pub emit: EmitOptions,
    pub format_command: Option<String>,
}

impl GeneratorConfig {
    /// Merge the config file with CLI overrides and validate the result.
    ///
    /// Overrides win over the file; the file wins over defaults. GOROOT
    /// falls back to `go env GOROOT` when neither sets it.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let goroot = env::resolve_goroot(overrides.goroot.or(file.goroot).as_deref())?;
        let goroot = std::path::absolute(&goroot).map_err(|e| StdpkgsError::io(&goroot, e))?;

        let mut roots = env::source_dirs(&goroot);
        roots.extend(file.roots);
        roots.extend(overrides.roots);

        let skip = SkipRules {
            skip_major_versions: !overrides.keep_major_versions
                && file.skip_major_versions.unwrap_or(true),
            extra: file.skip_dirs,
        };

        let emit = EmitOptions {
            package: overrides
                .package
                .or(file.package)
                .unwrap_or_else(|| emit::DEFAULT_PACKAGE.to_string()),
            type_name: file
                .type_name
                .unwrap_or_else(|| emit::DEFAULT_TYPE_NAME.to_string()),
            var_name: file
                .var_name
                .unwrap_or_else(|| emit::DEFAULT_VAR_NAME.to_string()),
            placeholder: overrides
                .placeholder
                .or(file.placeholder)
                .unwrap_or_else(|| emit::DEFAULT_PLACEHOLDER.to_string()),
            header: file.header,
        };

        let config = Self {
            goroot,
            roots,
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            skip,
            emit,
            format_command: overrides
                .format_command
                .or(file.format_command)
                .filter(|c| !c.trim().is_empty()),
        };
        config.validate()?;
        debug!(?config, "Resolved generator config");
        Ok(config)
    }

    /// Reject settings that would produce an invalid Go file
    pub fn validate(&self) -> Result<()> {
        for (what, name) in [
            ("package", &self.emit.package),
            ("type_name", &self.emit.type_name),
            ("var_name", &self.emit.var_name),
        ] {
            if !literal::is_identifier(name) {
                return Err(StdpkgsError::Config(format!(
                    "{what} {name:?} is not a valid Go identifier"
                )));
            }
        }
        if self.emit.type_name == self.emit.var_name {
            return Err(StdpkgsError::Config(format!(
                "type_name and var_name must differ (both {:?})",
                self.emit.type_name
            )));
        }
        if self.emit.placeholder.is_empty() {
            return Err(StdpkgsError::Config("placeholder must not be empty".to_string()));
        }
        if let Some(line) = self.emit.header.iter().find(|l| l.contains('\n')) {
            return Err(StdpkgsError::Config(format!(
                "header line {line:?} contains a newline; use one entry per line"
            )));
        }
        if self.output.as_os_str().is_empty() {
            return Err(StdpkgsError::Config("output path must not be empty".to_string()));
        }
        Ok(())
    }
}
