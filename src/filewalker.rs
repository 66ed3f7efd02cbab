use crate::extensions::ExtensionSet;
use crate::source::SourceFile;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::{debug, info};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Why a root was left out of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    NotADirectory,
}

/// A root that contributed no files, rendered as a one-line diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRoot {
    pub root: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::Missing => write!(f, "Directory {} does not exist.", self.root),
            SkipReason::NotADirectory => write!(f, "{} is not a directory.", self.root),
        }
    }
}

/// Everything a scan produced, files in collection order.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files: Vec<SourceFile>,
    pub skipped: Vec<SkippedRoot>,
}

/// Scans each root in order and reads every file whose extension is in `extensions`.
///
/// Missing roots are recorded in [`ScanOutcome::skipped`]. Any walk or read
/// error aborts the whole scan.
pub async fn scan_directories<S: AsRef<str>>(
    roots: &[S],
    extensions: &ExtensionSet,
) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    for root in roots {
        let root = root.as_ref();
        let root_path = Path::new(root);

        let reason = match fs::metadata(root_path).await {
            Ok(meta) if meta.is_dir() => None,
            Ok(_) => Some(SkipReason::NotADirectory),
            Err(err) if err.kind() == ErrorKind::NotFound => Some(SkipReason::Missing),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to stat root: {root}"));
            }
        };

        if let Some(reason) = reason {
            debug!("Skipping root {root}: {reason:?}");
            outcome.skipped.push(SkippedRoot {
                root: root.to_string(),
                reason,
            });
            continue;
        }

        let paths = collect_files(root_path, extensions)?;
        info!("Found {} matching files under {}", paths.len(), root);

        for path in paths {
            outcome.files.push(SourceFile::read(path).await?);
        }
    }

    Ok(outcome)
}

/// Walks `root` depth-first in directory listing order and returns matching file paths.
///
/// Ignore files, hidden-file filtering and sorting are all disabled; every
/// entry the filesystem lists is visited. Symlinked directories are not followed.
/// Returned paths have `.` components removed, so a root of `./` yields `a.js`.
pub fn collect_files(root: &Path, extensions: &ExtensionSet) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    let mut paths = Vec::new();

    for result in builder.build() {
        let entry = result.with_context(|| format!("Error walking path: {}", root.display()))?;
        let path = entry.path();

        if path.is_file() && extensions.matches(path) {
            debug!("Collecting {}", path.display());
            paths.push(normalize_path(path));
        }
    }

    Ok(paths)
}

/// Drops `.` components from a path, e.g. `./src/./a.js` becomes `src/a.js`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
