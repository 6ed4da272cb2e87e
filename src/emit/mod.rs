// src/emit/mod.rs
// Go source emission for the package index

pub mod format;
pub mod literal;

use crate::packages::PackageIndex;
use std::fmt::Write as _;
use std::path::Path;

/// Default Go package clause of the generated file
pub const DEFAULT_PACKAGE: &str = "filters";
/// Default name of the generated record struct
pub const DEFAULT_TYPE_NAME: &str = "stdpkg";
/// Default name of the generated map variable
pub const DEFAULT_VAR_NAME: &str = "stdpkgs";
/// Token that replaces GOROOT in emitted directories
pub const DEFAULT_PLACEHOLDER: &str = "/go";

/// Marker recognized by Go tooling as generated code
const GENERATED_MARKER: &str = "// Code generated by stdpkgs. DO NOT EDIT.";

/// Naming and layout of the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub package: String,
    pub type_name: String,
    pub var_name: String,
    pub placeholder: String,
    /// Comment lines above the generated marker, without the `//` prefix
    pub header: Vec<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            type_name: DEFAULT_TYPE_NAME.to_string(),
            var_name: DEFAULT_VAR_NAME.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            header: Vec::new(),
        }
    }
}

/// Render `index` as a Go source file.
///
/// The output is already in gofmt layout. Every record directory under
/// `goroot` is rewritten to start with the placeholder instead, and so is
/// any mention of `goroot` in the header lines.
pub fn emit(index: &PackageIndex, goroot: &Path, options: &EmitOptions) -> String {
    let mut out = String::new();

    let goroot_text = slash_path(goroot);
    let goroot_text = goroot_text.trim_end_matches('/');
    let placeholder = options.placeholder.trim_end_matches('/');
    for line in &options.header {
        let line = if goroot_text.is_empty() {
            line.clone()
        } else {
            line.replace(goroot_text, placeholder)
        };
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            let _ = writeln!(out, "// {line}");
        }
    }
    if !options.header.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{GENERATED_MARKER}\n");
    let _ = writeln!(out, "package {}\n", options.package);
    let _ = writeln!(out, "type {} struct {{\n\tpath, dir string\n}}\n", options.type_name);

    let ty = &options.type_name;
    let var = &options.var_name;
    if index.is_empty() {
        let _ = writeln!(out, "var {var} = map[string][]{ty}{{}}");
        return out;
    }

    let _ = writeln!(out, "var {var} = map[string][]{ty}{{");
    for (name, records) in index.iter() {
        let _ = writeln!(out, "\t{}: {{", literal::quote(name));
        for record in records {
            let dir = portable_dir(&record.dir, goroot, &options.placeholder);
            let _ = writeln!(
                out,
                "\t\t{{path: {}, dir: {}}},",
                literal::quote(&record.import_path),
                literal::quote(&dir)
            );
        }
        out.push_str("\t},\n");
    }
    out.push_str("}\n");
    out
}

/// Render `dir` with `/` separators, replacing a leading `goroot` with `placeholder`
pub fn portable_dir(dir: &Path, goroot: &Path, placeholder: &str) -> String {
    match dir.strip_prefix(goroot) {
        Ok(rest) => {
            let rest = slash_path(rest);
            if rest.is_empty() {
                placeholder.to_string()
            } else {
                format!("{}/{}", placeholder.trim_end_matches('/'), rest)
            }
        }
        Err(_) => slash_path(dir),
    }
}

fn slash_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::PackageRecord;
    use std::path::PathBuf;

    fn index_of(goroot: &Path, paths: &[&str]) -> PackageIndex {
        let mut index = PackageIndex::new();
        for path in paths {
            let mut dir = goroot.join("src");
            for segment in path.split('/') {
                dir.push(segment);
            }
            index.insert(PackageRecord::new(*path, dir));
        }
        index
    }

    // ============================================================================
    // emit tests
    // ============================================================================

    #[test]
    fn test_emit_layout() {
        let goroot = PathBuf::from("/usr/lib/go");
        let index = index_of(&goroot, &["fmt", "net/http"]);
        let out = emit(&index, &goroot, &EmitOptions::default());

        let expected = "\
// Code generated by stdpkgs. DO NOT EDIT.

package filters

type stdpkg struct {
\tpath, dir string
}

var stdpkgs = map[string][]stdpkg{
\t\"fmt\": {
\t\t{path: \"fmt\", dir: \"/go/src/fmt\"},
\t},
\t\"http\": {
\t\t{path: \"net/http\", dir: \"/go/src/net/http\"},
\t},
}
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_emit_empty_index() {
        let out = emit(&PackageIndex::new(), Path::new("/go"), &EmitOptions::default());
        assert!(out.ends_with("var stdpkgs = map[string][]stdpkg{}\n"));
    }

    #[test]
    fn test_emit_replaces_every_goroot_occurrence() {
        let goroot = PathBuf::from("/opt/toolchains/go1.22");
        let index = index_of(&goroot, &["a/util", "b/util", "fmt", "net/http"]);
        let out = emit(&index, &goroot, &EmitOptions::default());

        assert!(!out.contains("/opt/toolchains/go1.22"));
        assert_eq!(out.matches("dir: \"/go/src/").count(), 4);
    }

    #[test]
    fn test_emit_shared_base_name_keeps_both_records() {
        let goroot = PathBuf::from("/go");
        let index = index_of(&goroot, &["a/util", "b/util"]);
        let out = emit(&index, &goroot, &EmitOptions::default());

        assert_eq!(out.matches("\t\"util\": {").count(), 1);
        assert!(out.contains("{path: \"a/util\", dir: \"/go/src/a/util\"},"));
        assert!(out.contains("{path: \"b/util\", dir: \"/go/src/b/util\"},"));
    }

    #[test]
    fn test_emit_custom_names_and_header() {
        let goroot = PathBuf::from("/go");
        let index = index_of(&goroot, &["fmt"]);
        let options = EmitOptions {
            package: "imports".to_string(),
            type_name: "pkgInfo".to_string(),
            var_name: "stdlib".to_string(),
            placeholder: "$GOROOT".to_string(),
            header: vec!["Copyright 2016 govend.".to_string(), String::new()],
        };
        let out = emit(&index, &goroot, &options);

        assert!(out.starts_with("// Copyright 2016 govend.\n//\n\n// Code generated"));
        assert!(out.contains("package imports\n"));
        assert!(out.contains("type pkgInfo struct {"));
        assert!(out.contains("var stdlib = map[string][]pkgInfo{"));
        assert!(out.contains("dir: \"$GOROOT/src/fmt\""));
    }

    #[test]
    fn test_emit_header_hides_goroot() {
        let goroot = PathBuf::from("/home/builder/sdk/go1.22");
        let index = index_of(&goroot, &["fmt"]);
        let options = EmitOptions {
            header: vec![
                "Generated from /home/builder/sdk/go1.22/src".to_string(),
                "GOROOT=/home/builder/sdk/go1.22 (/home/builder/sdk/go1.22/bin/go)".to_string(),
            ],
            ..EmitOptions::default()
        };
        let out = emit(&index, &goroot, &options);

        assert!(!out.contains("/home/builder"));
        assert!(out.starts_with("// Generated from /go/src\n// GOROOT=/go (/go/bin/go)\n\n"));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let goroot = PathBuf::from("/go");
        let first = emit(&index_of(&goroot, &["z", "a", "m/k"]), &goroot, &EmitOptions::default());
        let second = emit(&index_of(&goroot, &["m/k", "z", "a"]), &goroot, &EmitOptions::default());
        assert_eq!(first, second);
    }

    // ============================================================================
    // portable_dir tests
    // ============================================================================

    #[test]
    fn test_portable_dir_under_goroot() {
        let goroot = Path::new("/usr/lib/go");
        let dir = goroot.join("src").join("fmt");
        assert_eq!(portable_dir(&dir, goroot, "/go"), "/go/src/fmt");
    }

    #[test]
    fn test_portable_dir_goroot_itself() {
        let goroot = Path::new("/usr/lib/go");
        assert_eq!(portable_dir(goroot, goroot, "/go"), "/go");
    }

    #[test]
    fn test_portable_dir_trailing_slash_placeholder() {
        let goroot = Path::new("/usr/lib/go");
        let dir = goroot.join("src");
        assert_eq!(portable_dir(&dir, goroot, "/go/"), "/go/src");
    }

    #[test]
    fn test_portable_dir_outside_goroot_untouched() {
        let goroot = Path::new("/usr/lib/go");
        assert_eq!(
            portable_dir(Path::new("/opt/extra/src/pkg"), goroot, "/go"),
            "/opt/extra/src/pkg"
        );
    }

    #[test]
    fn test_portable_dir_requires_component_boundary() {
        let goroot = Path::new("/usr/lib/go");
        assert_eq!(
            portable_dir(Path::new("/usr/lib/gopher/src"), goroot, "/go"),
            "/usr/lib/gopher/src"
        );
    }
}
