use crate::source::SourceFile;
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Writes collected files as a sequence of labelled fenced code blocks.
///
/// Each entry is the file path, a blank line, and a fence tagged with the
/// file's extension. Content is copied verbatim, so a file that itself
/// contains a fence delimiter will break the surrounding Markdown.
pub struct MarkdownWriter<W: AsyncWrite + Unpin> {
    writer: BufWriter<W>,
    entries: usize,
}

impl MarkdownWriter<File> {
    /// Creates (or truncates) the output file.
    pub async fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .await
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: AsyncWrite + Unpin> MarkdownWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            entries: 0,
        }
    }

    pub async fn write_entry(&mut self, file: &SourceFile) -> Result<()> {
        let path = file.path();
        debug!("Writing file: {}", path.display());

        self.writer
            .write_all(format!("{}\n\n```{}\n", path.display(), file.extension()).as_bytes())
            .await
            .with_context(|| format!("Failed to write heading for {}", path.display()))?;

        self.writer
            .write_all(file.content().as_bytes())
            .await
            .with_context(|| format!("Failed to write content of {}", path.display()))?;

        self.writer.write_all(b"\n```\n\n").await.with_context(|| {
            format!("Failed to write closing code fence for {}", path.display())
        })?;

        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flushes and closes the output, handing back the underlying writer.
    pub async fn finish(mut self) -> Result<W> {
        self.writer
            .shutdown()
            .await
            .context("Failed to flush output")?;
        Ok(self.writer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(files: &[SourceFile]) -> String {
        let mut writer = MarkdownWriter::new(Vec::new());
        for file in files {
            writer.write_entry(file).await.unwrap();
        }
        String::from_utf8(writer.finish().await.unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_single_entry_layout() {
        let out = render(&[SourceFile::new("proj/a.py", "print(1)")]).await;
        assert_eq!(out, "proj/a.py\n\n```py\nprint(1)\n```\n\n");
    }

    #[tokio::test]
    async fn test_entries_follow_collection_order() {
        let out = render(&[
            SourceFile::new("z.rs", "fn z() {}"),
            SourceFile::new("a.go", "package a"),
        ])
        .await;
        assert_eq!(
            out,
            "z.rs\n\n```rs\nfn z() {}\n```\n\na.go\n\n```go\npackage a\n```\n\n"
        );
    }

    #[tokio::test]
    async fn test_no_entries_writes_empty_document() {
        assert_eq!(render(&[]).await, "");
    }

    #[tokio::test]
    async fn test_content_is_not_escaped() {
        let content = "Usage:\n```sh\nrun\n```";
        let out = render(&[SourceFile::new("README.md", content)]).await;
        assert_eq!(out, format!("README.md\n\n```md\n{content}\n```\n\n"));
    }

    #[tokio::test]
    async fn test_counts_entries() {
        let mut writer = MarkdownWriter::new(Vec::new());
        writer.write_entry(&SourceFile::new("a.c", "int x;")).await.unwrap();
        writer.write_entry(&SourceFile::new("b.h", "")).await.unwrap();
        assert_eq!(writer.entries(), 2);
    }
}
