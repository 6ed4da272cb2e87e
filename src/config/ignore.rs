// src/config/ignore.rs
// Directory skip rules for the standard library walk

/// Directory names that never hold importable packages
pub const GO_SKIP: &[&str] = &["testdata"];

/// Directory holding vendored third-party modules
pub const VENDOR_DIR: &str = "vendor";

/// Check if a directory name is skipped by the built-in rules.
///
/// Names starting with `.` (hidden) or an ASCII digit (vendored version
/// directories) are skipped, as is anything in [`GO_SKIP`].
pub fn should_skip(name: &str) -> bool {
    match name.as_bytes().first() {
        None => true,
        Some(b'.') => true,
        Some(c) if c.is_ascii_digit() => true,
        _ => GO_SKIP.contains(&name),
    }
}

/// Check if a name looks like a module major-version directory (`v1`, `v2`, ...)
pub fn is_major_version_dir(name: &str) -> bool {
    match name.strip_prefix('v') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Skip rules applied to every directory the walker sees.
#[derive(Debug, Clone)]
pub struct SkipRules {
    /// Skip `v<digits>` directories below a `vendor` directory
    pub skip_major_versions: bool,
    /// Additional exact directory names to skip
    pub extra: Vec<String>,
}

impl Default for SkipRules {
    fn default() -> Self {
        Self {
            skip_major_versions: true,
            extra: Vec::new(),
        }
    }
}

impl SkipRules {
    /// Check a directory name against the built-in and configured rules.
    ///
    /// `in_vendor` is true when some ancestor of the directory is named
    /// `vendor`. Major-version directories are only skipped there, so
    /// standard packages such as `math/rand/v2` are kept.
    pub fn should_skip(&self, name: &str, in_vendor: bool) -> bool {
        if should_skip(name) {
            return true;
        }
        if self.skip_major_versions && in_vendor && is_major_version_dir(name) {
            return true;
        }
        self.extra.iter().any(|p| p == name)
    }
}
