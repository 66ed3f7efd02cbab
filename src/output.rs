//! Output file naming.
//!
//! The output always lands directly in one directory (the current working
//! directory for the CLI). A requested name that is already taken there gets
//! an increasing numeric suffix: `output.md`, `output1.md`, `output2.md`, ...

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const DEFAULT_BASE_NAME: &str = "output";
pub const DEFAULT_EXTENSION: &str = ".md";

/// The resolved output file for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub base_name: String,
    /// Extension with its leading dot.
    pub extension: String,
    /// The chosen file name, including any collision suffix.
    pub file_name: String,
    pub final_path: PathBuf,
}

/// Splits a user supplied name into base name and extension, applying defaults.
///
/// Only the last path component is used. An empty name becomes `output`, a
/// name without an extension gets `.md`.
pub fn split_requested_name(requested: &str) -> (String, String) {
    let trimmed = requested.trim();
    let name = Path::new(if trimmed.is_empty() {
        DEFAULT_BASE_NAME
    } else {
        trimmed
    });

    let Some(file_name) = name.file_name() else {
        return (DEFAULT_BASE_NAME.to_string(), DEFAULT_EXTENSION.to_string());
    };
    let file_name = Path::new(file_name);

    let extension = file_name
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let base_name = file_name
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string());

    (base_name, extension)
}

/// Picks the first of `{base}{ext}`, `{base}1{ext}`, `{base}2{ext}`, ... not in `existing`.
pub fn pick_free_name(base_name: &str, extension: &str, existing: &HashSet<OsString>) -> String {
    let mut candidate = format!("{base_name}{extension}");
    let mut counter: u64 = 1;

    while existing.contains(OsStr::new(&candidate)) {
        candidate = format!("{base_name}{counter}{extension}");
        counter += 1;
    }

    candidate
}

/// Lists the names of `dir`'s top-level entries.
pub async fn list_entry_names(dir: &Path) -> Result<HashSet<OsString>> {
    let mut names = HashSet::new();
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?
    {
        names.insert(entry.file_name());
    }

    Ok(names)
}

/// Resolves `requested` to a file name that does not yet exist in `dir`.
pub async fn resolve_output_target(requested: &str, dir: &Path) -> Result<OutputTarget> {
    let (base_name, extension) = split_requested_name(requested);
    let existing = list_entry_names(dir).await?;
    let file_name = pick_free_name(&base_name, &extension, &existing);
    let final_path = dir.join(&file_name);

    debug!("Resolved output name {:?} to {}", requested, final_path.display());

    Ok(OutputTarget {
        base_name,
        extension,
        file_name,
        final_path,
    })
}
