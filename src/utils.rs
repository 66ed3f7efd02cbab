use std::ffi::OsStr;
use std::path::Path;

/// The fence info string for a file: its extension without the leading dot.
pub fn fence_tag(path: &Path) -> &str {
    path.extension().and_then(OsStr::to_str).unwrap_or("")
}

/// Splits a comma separated folder list, trimming each name and dropping empties.
pub fn parse_folder_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_tag() {
        assert_eq!(fence_tag(Path::new("src/main.rs")), "rs");
        assert_eq!(fence_tag(Path::new("app.tsx")), "tsx");
        assert_eq!(fence_tag(Path::new("Makefile")), "");
    }

    #[test]
    fn test_parse_folder_list_trims() {
        assert_eq!(parse_folder_list("src, lib ,  tests"), ["src", "lib", "tests"]);
    }

    #[test]
    fn test_parse_folder_list_empty_input() {
        assert!(parse_folder_list("").is_empty());
        assert!(parse_folder_list("  \n").is_empty());
        assert!(parse_folder_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_folder_list_keeps_order() {
        assert_eq!(parse_folder_list("b,a,c"), ["b", "a", "c"]);
    }
}
