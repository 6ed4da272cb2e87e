//! Standard library directory walking.
//!
//! Every directory under a source root is a candidate package. Directories
//! rejected by [`SkipRules`] are pruned before descent, so nothing below a
//! `testdata` or `.git` directory is ever visited. Children are visited in
//! file-name order, which makes the record order inside each index key
//! stable across runs.

// src/packages/walker.rs
use super::{PackageIndex, PackageRecord};
use crate::config::ignore::{SkipRules, VENDOR_DIR};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Counters collected while walking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Source roots that were walked
    pub roots: usize,
    /// Directories recorded as packages
    pub recorded: usize,
    /// Directories pruned by skip rules
    pub skipped: usize,
    /// Directories (or roots) that could not be read
    pub unreadable: usize,
}

impl WalkStats {
    fn absorb(&mut self, other: WalkStats) {
        self.roots += other.roots;
        self.recorded += other.recorded;
        self.skipped += other.skipped;
        self.unreadable += other.unreadable;
    }
}

/// Walk every source root into `index`.
///
/// Relative roots are resolved against the working directory first.
pub fn walk_roots(roots: &[PathBuf], rules: &SkipRules, index: &mut PackageIndex) -> WalkStats {
    let mut stats = WalkStats::default();
    for root in roots {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.clone());
        stats.absorb(walk_source_root(&root, rules, index));
    }
    info!(
        roots = stats.roots,
        recorded = stats.recorded,
        skipped = stats.skipped,
        unreadable = stats.unreadable,
        "Walk complete"
    );
    stats
}

/// Walk a single source root, recording each package directory below it.
///
/// The root itself is not a package. Read errors are logged and the
/// affected subtree is skipped; they never abort the walk.
pub fn walk_source_root(root: &Path, rules: &SkipRules, index: &mut PackageIndex) -> WalkStats {
    let mut skipped = 0usize;

    info!("Walking source root {}", root.display());

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if !entry.file_type().is_dir() {
                return true;
            }
            let Some(name) = entry.file_name().to_str() else {
                warn!(path = %entry.path().display(), "Skipping directory with non-UTF-8 name");
                skipped += 1;
                return false;
            };
            if rules.should_skip(name, has_vendor_ancestor(root, entry.path())) {
                skipped += 1;
                return false;
            }
            true
        });

    let mut stats = record_entries(root, walker, index);
    stats.roots = 1;
    stats.skipped = skipped;
    stats
}

/// Record every directory entry, logging and counting read errors
fn record_entries<I>(root: &Path, entries: I, index: &mut PackageIndex) -> WalkStats
where
    I: IntoIterator<Item = walkdir::Result<DirEntry>>,
{
    let mut stats = WalkStats::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                stats.unreadable += 1;
                let path = e.path().unwrap_or(root);
                warn!(path = %path.display(), error = %e, "Skipping unreadable directory");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(import_path) = import_path(root, entry.path()) else {
            continue;
        };
        debug!(import_path = %import_path, "Recorded package");
        index.insert(PackageRecord::new(import_path, entry.path()));
        stats.recorded += 1;
    }

    stats
}

/// Check whether any directory between `root` and `dir` (exclusive) is `vendor`
fn has_vendor_ancestor(root: &Path, dir: &Path) -> bool {
    let Some(parent) = dir.parent() else {
        return false;
    };
    let Ok(relative) = parent.strip_prefix(root) else {
        return false;
    };
    relative
        .components()
        .any(|c| matches!(c, Component::Normal(s) if s == VENDOR_DIR))
}

/// Import path of `dir` relative to `root`, joined with `/`.
///
/// `None` for the root itself, for paths outside it and for non-UTF-8 segments.
fn import_path(root: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        if let Component::Normal(s) = component {
            segments.push(s.to_str()?);
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}
