use crate::utils::fence_tag;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A collected file and its full text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Reads the whole file as text. Invalid UTF-8 is replaced rather than rejected.
    pub async fn read(path: PathBuf) -> Result<Self> {
        let bytes = fs::read(&path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                debug!("Invalid UTF-8 in {}, decoding lossily", path.display());
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The extension without its leading dot, or `""` when there is none.
    pub fn extension(&self) -> &str {
        fence_tag(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extension_is_derived_from_path() {
        let file = SourceFile::new("proj/a.py", "print(1)");
        assert_eq!(file.extension(), "py");
        assert_eq!(file.content(), "print(1)");
        assert_eq!(file.path(), Path::new("proj/a.py"));
    }

    #[tokio::test]
    async fn test_read_keeps_content_verbatim() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("main.rs");
        let content = "fn main() {\r\n    println!(\"héllo\");\r\n}\n\n";
        std::fs::write(&path, content)?;

        let file = SourceFile::read(path.clone()).await?;
        assert_eq!(file.content(), content);
        assert_eq!(file.path(), path.as_path());
        Ok(())
    }

    #[tokio::test]
    async fn test_read_replaces_invalid_utf8() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("latin1.c");
        std::fs::write(&path, [b'a', 0xFF, b'b'])?;

        let file = SourceFile::read(path).await?;
        assert_eq!(file.content(), "a\u{FFFD}b");
        Ok(())
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = SourceFile::read(dir.path().join("gone.rs")).await;
        assert!(result.is_err());
    }
}
