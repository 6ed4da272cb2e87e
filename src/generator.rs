// src/generator.rs
// The generation pipeline: walk, emit, format, write

use crate::config::GeneratorConfig;
use crate::emit;
use crate::error::Result;
use crate::output::{self, WriteOutcome};
use crate::packages::{self, PackageIndex, WalkStats};
use tracing::info;

/// What to do with the generated source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write the output file (skipped when unchanged)
    #[default]
    Write,
    /// Compare against the existing output file without writing
    Check,
}

/// Result of rendering the index, before it touches the output file
#[derive(Debug, Clone)]
pub struct Generated {
    pub index: PackageIndex,
    pub stats: WalkStats,
    /// Final Go source, after the optional formatter
    pub source: String,
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub names: usize,
    pub packages: usize,
    pub stats: WalkStats,
    /// `None` in check mode
    pub outcome: Option<WriteOutcome>,
}

/// Walk the configured roots and render the Go source
pub fn generate(config: &GeneratorConfig) -> Result<Generated> {
    let mut index = PackageIndex::new();
    let stats = packages::walk_roots(&config.roots, &config.skip, &mut index);

    let mut source = emit::emit(&index, &config.goroot, &config.emit);
    if let Some(command) = &config.format_command {
        source = emit::format::run_formatter(command, &source)?;
    }

    Ok(Generated {
        index,
        stats,
        source,
    })
}

/// Generate and then write or check the output file
pub fn run(config: &GeneratorConfig, mode: Mode) -> Result<RunSummary> {
    let generated = generate(config)?;

    let outcome = match mode {
        Mode::Write => Some(output::write_if_changed(&config.output, &generated.source)?),
        Mode::Check => {
            output::check_up_to_date(&config.output, &generated.source)?;
            None
        }
    };

    let summary = RunSummary {
        names: generated.index.len(),
        packages: generated.index.package_count(),
        stats: generated.stats,
        outcome,
    };
    info!(
        names = summary.names,
        packages = summary.packages,
        output = %config.output.display(),
        "Generation finished"
    );
    Ok(summary)
}
