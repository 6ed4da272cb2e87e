// src/cli/mod.rs
// Command-line interface for the stdpkgs generator

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stdpkgs::config::{DEFAULT_CONFIG_FILE, FileConfig, GeneratorConfig, Overrides};
use stdpkgs::generator::{self, Mode};
use stdpkgs::output::WriteOutcome;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stdpkgs")]
#[command(about = "Generate a Go source file indexing every standard library package")]
#[command(version)]
pub struct Cli {
    /// Go installation root (default: `go env GOROOT`)
    #[arg(long, env = "GOROOT")]
    pub goroot: Option<PathBuf>,

    /// Output file (default: stdpkgs.go)
    #[arg(short, long, env = "STDPKGS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Go package name of the generated file (default: filters)
    #[arg(long)]
    pub package: Option<String>,

    /// Token written in place of GOROOT (default: /go)
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Additional source root to walk (repeatable)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Record v1, v2, ... directories under vendor/ instead of skipping them
    #[arg(long)]
    pub keep_major_versions: bool,

    /// Formatter to pipe the output through, e.g. "gofmt"
    #[arg(long, env = "STDPKGS_FORMAT_COMMAND")]
    pub format_command: Option<String>,

    /// Fail if the output file is missing or out of date; write nothing
    #[arg(long)]
    pub check: bool,

    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            goroot: self.goroot.clone(),
            output: self.output.clone(),
            package: self.package.clone(),
            placeholder: self.placeholder.clone(),
            roots: self.roots.clone(),
            keep_major_versions: self.keep_major_versions,
            format_command: self.format_command.clone(),
        }
    }

    fn mode(&self) -> Mode {
        if self.check { Mode::Check } else { Mode::Write }
    }
}

/// Run the generator with the parsed command line
pub fn run_generate(cli: &Cli) -> Result<()> {
    let file = FileConfig::load(&cli.config)?;
    let config = GeneratorConfig::resolve(file, cli.overrides())
        .context("Invalid generator configuration")?;

    info!(goroot = %config.goroot.display(), "Generating standard library index");

    let summary = generator::run(&config, cli.mode())?;

    match summary.outcome {
        Some(WriteOutcome::Written) => println!(
            "Wrote {} packages under {} names to {}",
            summary.packages,
            summary.names,
            config.output.display()
        ),
        Some(WriteOutcome::Unchanged) => {
            println!("{} is already up to date", config.output.display())
        }
        None => println!("{} is up to date", config.output.display()),
    }
    if summary.stats.unreadable > 0 {
        eprintln!(
            "warning: {} directories could not be read and were skipped",
            summary.stats.unreadable
        );
    }
    Ok(())
}
