// src/packages/mod.rs
// Package records and the name-keyed index built by the walker

pub mod walker;

pub use walker::{WalkStats, walk_roots, walk_source_root};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// A discovered standard library package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Full import path, always `/`-separated (e.g. "net/http")
    pub import_path: String,
    /// Absolute path to the package directory (e.g. "/usr/lib/go/src/net/http")
    pub dir: PathBuf,
}

impl PackageRecord {
    pub fn new(import_path: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            import_path: import_path.into(),
            dir: dir.into(),
        }
    }

    /// Last segment of the import path, used as the index key
    pub fn base_name(&self) -> &str {
        self.import_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.import_path)
    }
}

/// Packages grouped by base name.
///
/// Keys iterate in lexicographic order; records under one key keep the order
/// they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageIndex {
    by_name: BTreeMap<String, Vec<PackageRecord>>,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under its base name
    pub fn insert(&mut self, record: PackageRecord) {
        self.by_name
            .entry(record.base_name().to_string())
            .or_default()
            .push(record);
    }

    /// Records sharing the base name `name`
    pub fn get(&self, name: &str) -> Option<&[PackageRecord]> {
        self.by_name.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of distinct base names
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Total number of records across all names
    pub fn package_count(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    /// Iterate `(name, records)` in sorted name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PackageRecord])> {
        self.by_name
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }
}
