//! The fixed allow-list of source file extensions.
//!
//! A file is collected only when its literal suffix (leading dot included,
//! compared case-sensitively) is a member of [`ExtensionSet::source`].

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

/// Every suffix recognised as source code.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", // JavaScript and TypeScript
    ".cpp", ".c", ".h", // C and C++
    ".json", ".dart", ".py", ".java", ".rb", ".php", ".html", ".htm",
    ".css", ".scss", ".sass", // stylesheets
    ".md", ".go", ".rs", ".swift", ".kt", ".kts",
    ".sh", ".bash", ".zsh", // shell
    ".pl", ".pm", ".r", ".jl", ".lua", ".sql",
];

static SOURCE: LazyLock<ExtensionSet> = LazyLock::new(|| ExtensionSet::new(SOURCE_EXTENSIONS));

/// An immutable set of file suffixes such as `.rs` or `.py`.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    suffixes: HashSet<&'static str>,
}

impl ExtensionSet {
    pub fn new(suffixes: &[&'static str]) -> Self {
        Self {
            suffixes: suffixes.iter().copied().collect(),
        }
    }

    /// The process-wide source code allow-list.
    pub fn source() -> &'static ExtensionSet {
        &SOURCE
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.contains(suffix)
    }

    /// Returns true if the path's extension is a member of this set.
    ///
    /// Follows [`Path::extension`], so dotfiles like `.bashrc` have no
    /// extension and never match.
    pub fn matches(&self, path: &Path) -> bool {
        suffix_of(path).is_some_and(|suffix| self.contains(&suffix))
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// The path's suffix with its leading dot, e.g. `.rs` for `src/lib.rs`.
pub fn suffix_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| format!(".{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_set_has_every_listed_suffix() {
        let set = ExtensionSet::source();
        assert_eq!(set.len(), 33);
        for suffix in SOURCE_EXTENSIONS {
            assert!(set.contains(suffix), "missing {suffix}");
        }
    }

    #[test]
    fn test_matches_known_extensions() {
        let set = ExtensionSet::source();
        assert!(set.matches(Path::new("proj/a.py")));
        assert!(set.matches(Path::new("src/main.rs")));
        assert!(set.matches(Path::new("build.gradle.kts")));
        assert!(set.matches(Path::new("analysis.r")));
    }

    #[test]
    fn test_rejects_unknown_extensions() {
        let set = ExtensionSet::source();
        assert!(!set.matches(Path::new("proj/sub/b.txt")));
        assert!(!set.matches(Path::new("Cargo.toml")));
        assert!(!set.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let set = ExtensionSet::source();
        assert!(!set.matches(Path::new("SCRIPT.PY")));
        assert!(!set.matches(Path::new("analysis.R")));
    }

    #[test]
    fn test_dotfiles_have_no_extension() {
        let set = ExtensionSet::source();
        assert!(!set.matches(Path::new(".bash")));
        assert!(!set.matches(Path::new("home/.zsh")));
        assert_eq!(suffix_of(Path::new(".bashrc")), None);
    }

    #[test]
    fn test_suffix_of_uses_last_extension() {
        assert_eq!(suffix_of(Path::new("a.tar.gz")).as_deref(), Some(".gz"));
        assert_eq!(suffix_of(Path::new("lib.rs")).as_deref(), Some(".rs"));
    }
}
